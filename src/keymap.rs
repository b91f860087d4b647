// Key bindings
// Maps physical key combinations to named editor actions. The editor
// shell feeds key events through `Keymap::lookup` and runs whatever
// action comes back.

/// Physical keys the registrar understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    Char(char),
}

/// A key plus its modifier state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCombo {
    pub key: Key,
    pub shift: bool,
}

impl KeyCombo {
    pub fn plain(key: Key) -> Self {
        KeyCombo { key, shift: false }
    }

    pub fn shifted(key: Key) -> Self {
        KeyCombo { key, shift: true }
    }
}

/// Named actions a key combination can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Indent,
    Outdent,
}

/// Binding table from key combinations to actions
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyCombo, Action)>,
}

impl Keymap {
    pub fn empty() -> Self {
        Keymap {
            bindings: Vec::new(),
        }
    }

    /// Bind `combo` to `action`, replacing any existing binding for the
    /// same combination
    pub fn bind(&mut self, combo: KeyCombo, action: Action) {
        self.bindings.retain(|(c, _)| *c != combo);
        self.bindings.push((combo, action));
    }

    pub fn unbind(&mut self, combo: KeyCombo) {
        self.bindings.retain(|(c, _)| *c != combo);
    }

    pub fn lookup(&self, combo: KeyCombo) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(c, _)| *c == combo)
            .map(|(_, action)| *action)
    }
}

impl Default for Keymap {
    /// Tab indents, Shift+Tab outdents
    fn default() -> Self {
        let mut keymap = Self::empty();
        keymap.bind(KeyCombo::plain(Key::Tab), Action::Indent);
        keymap.bind(KeyCombo::shifted(Key::Tab), Action::Outdent);
        keymap
    }
}
