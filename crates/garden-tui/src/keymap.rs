use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};
use garden_core::config::KeymapConfig;
use tracing::warn;

use crate::input::Action;

/// Parsed key binding (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Runtime keymap for key-to-action lookup
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    /// Create a keymap from configuration
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut bindings = HashMap::new();

        let mut add_binding = |key_str: &str, action: Action| {
            if let Some(binding) = parse_key_binding(key_str) {
                if let Some(existing) = bindings.get(&binding) {
                    warn!(
                        "Key conflict: '{}' already bound to {:?}, ignoring binding to {:?}",
                        key_str, existing, action
                    );
                } else {
                    bindings.insert(binding, action);
                }
            } else {
                warn!("Invalid key binding: '{}', action {:?} is unbound", key_str, action);
            }
        };

        add_binding(&config.quit, Action::Quit);
        add_binding(&config.next_card, Action::NextCard);
        add_binding(&config.prev_card, Action::PrevCard);
        add_binding(&config.activate, Action::Activate);
        add_binding(&config.move_down, Action::MoveDown);
        add_binding(&config.move_up, Action::MoveUp);
        add_binding(&config.scroll_half_down, Action::ScrollHalfPageDown);
        add_binding(&config.scroll_half_up, Action::ScrollHalfPageUp);
        add_binding(&config.open_item, Action::OpenItem);
        add_binding(&config.save, Action::Save);
        add_binding(&config.remove, Action::Remove);
        add_binding(&config.swipe_open, Action::SwipeOpen);
        add_binding(&config.swipe_close, Action::SwipeClose);
        add_binding(&config.help, Action::ToggleHelp);

        // Ctrl+C always quits
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        // Arrow keys are always available as alternatives
        bindings.entry(KeyBinding::simple(KeyCode::Up)).or_insert(Action::MoveUp);
        bindings.entry(KeyBinding::simple(KeyCode::Down)).or_insert(Action::MoveDown);
        bindings.entry(KeyBinding::simple(KeyCode::Left)).or_insert(Action::SwipeOpen);
        bindings.entry(KeyBinding::simple(KeyCode::Right)).or_insert(Action::SwipeClose);
        bindings.insert(KeyBinding::simple(KeyCode::Esc), Action::ExitMode);

        Self { bindings }
    }

    /// Get action for a key binding
    pub fn get(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding)
    }

    /// Look up a key as the terminal reports it.
    ///
    /// Terminals disagree on whether symbols like `?` carry SHIFT, so a
    /// shifted non-letter also matches its unshifted binding.
    pub fn lookup(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<&Action> {
        let binding = KeyBinding::new(code, modifiers);
        self.get(&binding).or_else(|| match code {
            KeyCode::Char(c) if modifiers == KeyModifiers::SHIFT && !c.is_ascii_alphabetic() => {
                self.get(&KeyBinding::simple(code))
            }
            _ => None,
        })
    }

    /// First key bound to `action`, in config notation, for hints
    pub fn key_for(&self, action: &Action) -> Option<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter(|(_, a)| *a == action)
            .map(|(binding, _)| format_key_binding(binding))
            .collect();
        keys.sort_by_key(|k| (k.starts_with('<'), k.len(), k.clone()));
        keys.into_iter().next()
    }
}

/// Parse Vim-style key notation into KeyBinding
/// Supported formats:
/// - Single char: "j", "k", "h", "l", "q", etc.
/// - Uppercase (Shift): "G", "N", etc.
/// - Special chars: "/", "?", etc.
/// - Ctrl: "<C-j>", "<C-d>", etc.
/// - Shift: "<S-Tab>", "<S-g>", etc.
/// - Special keys: "<CR>", "<Enter>", "<Esc>", "<Tab>", "<Space>", "<Left>", "<Right>", "<Up>", "<Down>"
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    if s.len() > 2 && s.starts_with('<') && s.ends_with('>') {
        let inner = &s[1..s.len() - 1];
        return parse_special_key(inner);
    }

    let mut chars = s.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    // Uppercase letters are Shift+letter
    if c.is_ascii_uppercase() {
        return Some(KeyBinding::shift(KeyCode::Char(c)));
    }
    Some(KeyBinding::simple(KeyCode::Char(c)))
}

/// Parse special key notation (content inside <...>)
fn parse_special_key(inner: &str) -> Option<KeyBinding> {
    if let Some(rest) = inner.strip_prefix("C-") {
        let key = parse_key_name(rest)?;
        return Some(KeyBinding::ctrl(key));
    }

    if let Some(rest) = inner.strip_prefix("S-") {
        return match parse_key_name(rest)? {
            // crossterm reports Shift+Tab as BackTab
            KeyCode::Tab => Some(KeyBinding::shift(KeyCode::BackTab)),
            KeyCode::Char(c) => Some(KeyBinding::shift(KeyCode::Char(c.to_ascii_uppercase()))),
            key => Some(KeyBinding::shift(key)),
        };
    }

    parse_key_name(inner).map(KeyBinding::simple)
}

/// Parse a key name (without modifiers)
fn parse_key_name(name: &str) -> Option<KeyCode> {
    match name.to_lowercase().as_str() {
        "cr" | "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "space" | "spc" => Some(KeyCode::Char(' ')),
        "bs" | "backspace" => Some(KeyCode::Backspace),
        "del" | "delete" => Some(KeyCode::Delete),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        _ => {
            // Single character after modifier (e.g., "j" in "<C-j>")
            let mut chars = name.chars();
            let c = chars.next()?;
            if chars.next().is_none() {
                Some(KeyCode::Char(c.to_ascii_lowercase()))
            } else {
                None
            }
        }
    }
}

/// Render a binding back into config notation
pub fn format_key_binding(binding: &KeyBinding) -> String {
    let name = match binding.code {
        KeyCode::Enter => "CR".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => return "<S-Tab>".to_string(),
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Backspace => "BS".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Char(c) => {
            if binding.modifiers == KeyModifiers::CONTROL {
                return format!("<C-{}>", c);
            }
            return c.to_string();
        }
        other => format!("{:?}", other),
    };

    if binding.modifiers == KeyModifiers::CONTROL {
        format!("<C-{}>", name)
    } else if binding.modifiers == KeyModifiers::SHIFT {
        format!("<S-{}>", name)
    } else {
        format!("<{}>", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_keys() {
        assert_eq!(
            parse_key_binding("j"),
            Some(KeyBinding::simple(KeyCode::Char('j')))
        );
        assert_eq!(
            parse_key_binding("?"),
            Some(KeyBinding::simple(KeyCode::Char('?')))
        );
        assert_eq!(
            parse_key_binding("1"),
            Some(KeyBinding::simple(KeyCode::Char('1')))
        );
        assert_eq!(parse_key_binding("jj"), None);
        assert_eq!(parse_key_binding(""), None);
    }

    #[test]
    fn test_parse_uppercase_keys() {
        assert_eq!(
            parse_key_binding("G"),
            Some(KeyBinding::shift(KeyCode::Char('G')))
        );
        assert_eq!(
            parse_key_binding("<S-g>"),
            Some(KeyBinding::shift(KeyCode::Char('G')))
        );
    }

    #[test]
    fn test_parse_ctrl_keys() {
        assert_eq!(
            parse_key_binding("<C-d>"),
            Some(KeyBinding::ctrl(KeyCode::Char('d')))
        );
        assert_eq!(
            parse_key_binding("<C-U>"),
            Some(KeyBinding::ctrl(KeyCode::Char('u')))
        );
    }

    #[test]
    fn test_parse_special_keys() {
        assert_eq!(
            parse_key_binding("<CR>"),
            Some(KeyBinding::simple(KeyCode::Enter))
        );
        assert_eq!(
            parse_key_binding("<Esc>"),
            Some(KeyBinding::simple(KeyCode::Esc))
        );
        assert_eq!(
            parse_key_binding("<Tab>"),
            Some(KeyBinding::simple(KeyCode::Tab))
        );
        assert_eq!(
            parse_key_binding("<S-Tab>"),
            Some(KeyBinding::shift(KeyCode::BackTab))
        );
        assert_eq!(parse_key_binding("<Nope>"), None);
    }

    #[test]
    fn test_keymap_from_config() {
        let keymap = Keymap::from_config(&KeymapConfig::default());

        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('q'))),
            Some(&Action::Quit)
        );
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Tab)),
            Some(&Action::NextCard)
        );
        assert_eq!(
            keymap.get(&KeyBinding::shift(KeyCode::BackTab)),
            Some(&Action::PrevCard)
        );
        assert_eq!(
            keymap.get(&KeyBinding::ctrl(KeyCode::Char('c'))),
            Some(&Action::Quit)
        );
    }

    #[test]
    fn test_conflicting_binding_keeps_first() {
        let config = KeymapConfig {
            save: "q".to_string(),
            ..Default::default()
        };
        let keymap = Keymap::from_config(&config);
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('q'))),
            Some(&Action::Quit)
        );
        assert_eq!(keymap.key_for(&Action::Save), None);
    }

    #[test]
    fn test_shifted_symbol_lookup() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.lookup(KeyCode::Char('?'), KeyModifiers::SHIFT),
            Some(&Action::ToggleHelp)
        );
        assert_eq!(keymap.lookup(KeyCode::Char('S'), KeyModifiers::SHIFT), None);
    }

    #[test]
    fn test_key_for_prefers_plain_keys() {
        let keymap = Keymap::default();
        assert_eq!(keymap.key_for(&Action::MoveDown).as_deref(), Some("j"));
        assert_eq!(keymap.key_for(&Action::Activate).as_deref(), Some("<CR>"));
        assert_eq!(keymap.key_for(&Action::Quit).as_deref(), Some("q"));
    }
}
