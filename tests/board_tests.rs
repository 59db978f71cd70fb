use wof_solver::{
    Board, BoardError, Cell, DictionaryIndex, LetterBoard, LetterStatus, WordSearch,
};

// Row 0 and 3 corners are unused, so words start at column 1 there.
const BOARD: &str = " c__c_\n#a___e#do_\n";

fn get_test_index() -> DictionaryIndex {
    DictionaryIndex::new([
        "couch", "coach", "cinch", "apple", "ample", "angle", "dog", "dot", "doe",
    ])
}

#[test]
fn test_default_board_layout() {
    let board = Board::new();
    assert_eq!(board.cell(0, 0), Some(Cell::Unused));
    assert_eq!(board.cell(0, 13), Some(Cell::Unused));
    assert_eq!(board.cell(3, 0), Some(Cell::Unused));
    assert_eq!(board.cell(3, 13), Some(Cell::Unused));
    assert_eq!(board.cell(1, 0), Some(Cell::Blank));
    assert_eq!(board.cell(4, 0), None);
    assert!(board.words().is_empty());
}

#[test]
fn test_parse_and_words() {
    let board = Board::parse(BOARD).unwrap();
    let words = board.words();

    assert_eq!(words.len(), 3);
    assert_eq!((words[0].row, words[0].column), (0, 1));
    assert_eq!(words[0].pattern(), "c__c_");
    assert_eq!((words[1].row, words[1].column), (1, 1));
    assert_eq!(words[1].pattern(), "a___e");
    assert_eq!((words[2].row, words[2].column), (1, 7));
    assert_eq!(words[2].pattern(), "do_");
    assert_eq!(words[2].len(), 3);
}

#[test]
fn test_word_ending_at_last_column() {
    let board = Board::parse("\n#__________dog").unwrap();
    let words = board.words();
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].column, 1);
    assert_eq!(words[0].len(), 13);
    assert_eq!(words[0].pattern(), "__________dog");
}

#[test]
fn test_known_letters_and_query() {
    let board = Board::parse(BOARD).unwrap();
    let word = &board.words()[0];

    let known = word.known_letters();
    assert_eq!(known.len(), 2);
    assert_eq!(known.get(&0), Some(&'c'));
    assert_eq!(known.get(&3), Some(&'c'));

    let query = word.to_query(['r', 's', 't']);
    assert_eq!(query.word_length(), 5);
    assert_eq!(query.known_letter(3), Some('c'));
    assert!(query.is_used('S'));
}

#[test]
fn test_parse_errors() {
    assert_eq!(Board::parse("\n\n\n\n_"), Err(BoardError::TooManyRows(5)));
    assert_eq!(
        Board::parse("\n#______________"),
        Err(BoardError::RowTooLong { row: 1, len: 15 })
    );
    assert_eq!(
        Board::parse("\n#ab%"),
        Err(BoardError::InvalidCell { row: 1, column: 3, ch: '%' })
    );
    assert_eq!(
        Board::parse("_"),
        Err(BoardError::GlyphInCorner { row: 0, column: 0 })
    );
}

#[test]
fn test_reveal() {
    let mut board = Board::parse(BOARD).unwrap();
    board.reveal(0, 2, 'o').unwrap();
    assert_eq!(board.cell(0, 2), Some(Cell::Revealed('o')));
    assert_eq!(board.words()[0].pattern(), "co_c_");

    assert_eq!(board.reveal(0, 0, 'x'), Err(BoardError::NotAGlyph { row: 0, column: 0 }));
    assert_eq!(board.reveal(1, 0, 'x'), Err(BoardError::NotAGlyph { row: 1, column: 0 }));
    assert_eq!(board.reveal(0, 2, '1'), Err(BoardError::NotALetter('1')));

    board.clear_letters();
    assert_eq!(board.words()[0].pattern(), "_____");
}

#[test]
fn test_letter_statuses() {
    let board = Board::parse(BOARD).unwrap();
    let mut letters = LetterBoard::new();
    letters.mark_incorrect('R');
    letters.mark_incorrect('c');

    assert_eq!(letters.status('c', &board), LetterStatus::Correct);
    assert_eq!(letters.status('r', &board), LetterStatus::Incorrect);
    assert_eq!(letters.status('z', &board), LetterStatus::Unknown);

    let statuses = letters.statuses(&board);
    assert_eq!(statuses.len(), 26);
    assert!(statuses.contains(&('d', LetterStatus::Correct)));
    assert!(statuses.contains(&('r', LetterStatus::Incorrect)));

    letters.unmark('r');
    assert_eq!(letters.status('r', &board), LetterStatus::Unknown);

    letters.reset();
    assert!(letters.incorrect().is_empty());
}

#[test]
fn test_revealed_letters() {
    let board = Board::parse(" AB\n#c").unwrap();
    let revealed: Vec<char> = board.revealed_letters().into_iter().collect();
    assert_eq!(revealed, vec!['a', 'b', 'c']);
}

#[test]
fn test_suggestions() {
    let index = get_test_index();
    let search = WordSearch::new(&index);
    let board = Board::parse(BOARD).unwrap();
    let mut letters = LetterBoard::new();
    for c in "rstlne".chars() {
        letters.mark_incorrect(c);
    }

    let suggestions = board.suggestions(&search, &letters, 10);
    assert_eq!(suggestions.len(), 3);
    assert_eq!(suggestions[0].1, ["couch", "coach"]);
    // 'l' is a wrong guess sitting in an open position of every candidate
    assert_eq!(suggestions[1].1, Vec::<&str>::new());
    assert_eq!(suggestions[2].1, ["dog", "doe"]);
}

#[test]
fn test_suggestions_skip_solved_words() {
    let index = get_test_index();
    let search = WordSearch::new(&index);
    let board = Board::parse(" dog do_").unwrap();

    let suggestions = board.suggestions(&search, &LetterBoard::new(), 1);
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].0.pattern(), "do_");
    assert_eq!(suggestions[0].1, ["dog"]);
}

#[test]
fn test_display() {
    let board = Board::parse(" do_").unwrap();
    let text = board.to_string();
    assert_eq!(text.lines().count(), 4);
    assert!(text.starts_with("| do_          |"));
}

#[test]
fn test_revealed_letter_is_no_longer_used() {
    let index = DictionaryIndex::new(["cook", "calm"]);
    let search = WordSearch::new(&index);
    let board = Board::parse(" co__").unwrap();
    let mut letters = LetterBoard::new();
    letters.mark_incorrect('O');
    letters.mark_incorrect('a');

    assert_eq!(letters.status('o', &board), LetterStatus::Correct);
    let used: Vec<char> = letters.used_letters(&board).into_iter().collect();
    assert_eq!(used, vec!['a']);

    let suggestions = board.suggestions(&search, &letters, 10);
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].1, ["cook"]);
}
