use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a character to its QWERTY equivalent for layout-independent key handling.
/// This allows vim-style navigation to work regardless of keyboard layout.
pub fn to_qwerty(c: char) -> char {
    match c {
        // Russian ЙЦУКЕН layout -> QWERTY
        'й' => 'q', 'Й' => 'Q',
        'ц' => 'w', 'Ц' => 'W',
        'у' => 'e', 'У' => 'E',
        'к' => 'r', 'К' => 'R',
        'е' => 't', 'Е' => 'T',
        'н' => 'y', 'Н' => 'Y',
        'г' => 'u', 'Г' => 'U',
        'ш' => 'i', 'Ш' => 'I',
        'щ' => 'o', 'Щ' => 'O',
        'з' => 'p', 'З' => 'P',
        'ф' => 'a', 'Ф' => 'A',
        'ы' => 's', 'Ы' => 'S',
        'в' => 'd', 'В' => 'D',
        'а' => 'f', 'А' => 'F',
        'п' => 'g', 'П' => 'G',
        'р' => 'h', 'Р' => 'H',
        'о' => 'j', 'О' => 'J',
        'л' => 'k', 'Л' => 'K',
        'д' => 'l', 'Д' => 'L',
        'я' => 'z', 'Я' => 'Z',
        'ч' => 'x', 'Ч' => 'X',
        'с' => 'c', 'С' => 'C',
        'м' => 'v', 'М' => 'V',
        'и' => 'b', 'И' => 'B',
        'т' => 'n', 'Т' => 'N',
        'ь' => 'm', 'Ь' => 'M',
        // Pass through unchanged if not mapped
        _ => c,
    }
}

/// Check if a KeyCode matches the expected character, accounting for keyboard layouts.
/// When expected is uppercase, match is case-sensitive.
/// When expected is lowercase, match is case-insensitive.
pub fn key_matches(key: &KeyCode, expected: char) -> bool {
    match key {
        KeyCode::Char(c) => {
            let normalized = to_qwerty(*c);
            if expected.is_uppercase() {
                // Case-sensitive match for uppercase expected (e.g., 'A' for deselect all)
                normalized == expected
            } else {
                // Case-insensitive match for lowercase expected (e.g., 'r' for rescan)
                normalized == expected || normalized.to_ascii_lowercase() == expected
            }
        }
        _ => false,
    }
}

/// User intents derived from keyboard input
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    // Navigation
    MoveUp,
    MoveDown,
    ToggleExpand,

    // Selection
    ToggleSelect,
    SelectAll,
    DeselectAll,

    // Destructive actions
    RequestTrash,
    RequestDelete,
    Confirm,
    Cancel,

    // Filter
    EnterFilter,
    ClearFilter,
    FilterChar(char),
    FilterBackspace,
    FilterCommit,
    FilterCancel,

    // Actions
    Rescan,
    ShowHelp,
    Dismiss,
    Quit,
}

/// Input modes for mapping keys to intents
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    List,
    Filter,
    Confirm,
    Help,
    /// A scan or cleanup is running; only quitting is possible
    Busy,
}

/// Map a key event to a user intent based on the current input mode
pub fn map_key_to_intent(key: &KeyEvent, mode: InputMode) -> Option<Intent> {
    let code = &key.code;

    if key.modifiers.contains(KeyModifiers::CONTROL) && *code == KeyCode::Char('c') {
        return Some(Intent::Quit);
    }

    match mode {
        InputMode::Filter => match code {
            KeyCode::Enter => Some(Intent::FilterCommit),
            KeyCode::Esc => Some(Intent::FilterCancel),
            KeyCode::Backspace => Some(Intent::FilterBackspace),
            KeyCode::Char(c) => Some(Intent::FilterChar(*c)),
            _ => None,
        },
        InputMode::Confirm => {
            if key_matches(code, 'y') {
                return Some(Intent::Confirm);
            }
            if *code == KeyCode::Esc || key_matches(code, 'n') {
                return Some(Intent::Cancel);
            }
            None
        }
        InputMode::Help => Some(Intent::Dismiss),
        InputMode::Busy => key_matches(code, 'q').then_some(Intent::Quit),
        InputMode::List => {
            if key_matches(code, 'q') {
                return Some(Intent::Quit);
            }
            if *code == KeyCode::Up || key_matches(code, 'k') {
                return Some(Intent::MoveUp);
            }
            if *code == KeyCode::Down || key_matches(code, 'j') {
                return Some(Intent::MoveDown);
            }
            if *code == KeyCode::Enter || *code == KeyCode::Right || key_matches(code, 'l') {
                return Some(Intent::ToggleExpand);
            }
            if *code == KeyCode::Char(' ') {
                return Some(Intent::ToggleSelect);
            }
            // Uppercase first: lowercase matching is case-insensitive
            if key_matches(code, 'A') {
                return Some(Intent::DeselectAll);
            }
            if key_matches(code, 'a') {
                return Some(Intent::SelectAll);
            }
            if key_matches(code, 't') {
                return Some(Intent::RequestTrash);
            }
            if key_matches(code, 'c') {
                return Some(Intent::RequestDelete);
            }
            if key_matches(code, 'r') {
                return Some(Intent::Rescan);
            }
            if *code == KeyCode::Char('/') {
                return Some(Intent::EnterFilter);
            }
            if *code == KeyCode::Char('?') {
                return Some(Intent::ShowHelp);
            }
            if *code == KeyCode::Esc {
                return Some(Intent::ClearFilter);
            }
            None
        }
    }
}
