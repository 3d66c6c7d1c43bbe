use super::config::non_negative_int_or;

/// What a watched element does when it first becomes visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    /// Add the revealed class only.
    Reveal,
    /// Add the revealed class and count up to `target`.
    Count { target: u64 },
}

/// Scroll-reveal action, resolved from the element as it is at first crossing.
/// Non-counters only reveal; counters count to `data-target` (malformed → 0).
pub fn reveal_action(is_counter: bool, data_target: Option<&str>) -> RevealAction {
    if is_counter {
        RevealAction::Count {
            target: non_negative_int_or(data_target, 0),
        }
    } else {
        RevealAction::Reveal
    }
}

/// Stat counter action at first crossing: `None` when the element already
/// carries the animated marker, otherwise count to its current text (malformed → 0).
pub fn stat_action(already_marked: bool, text: &str) -> Option<RevealAction> {
    if already_marked {
        return None;
    }
    Some(RevealAction::Count {
        target: non_negative_int_or(Some(text), 0),
    })
}

/// Fire-once bookkeeping for elements under one visibility observer.
///
/// Elements are registered in order and addressed by the returned index.
/// `on_visibility` is `true` only for an element's first intersecting
/// crossing; every later crossing is ignored.
#[derive(Clone, Debug, Default)]
pub struct RevealRegistry {
    fired: Vec<bool>,
}

impl RevealRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self) -> usize {
        self.fired.push(false);
        self.fired.len() - 1
    }

    pub fn on_visibility(&mut self, id: usize, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        match self.fired.get_mut(id) {
            Some(fired) if !*fired => {
                *fired = true;
                true
            }
            _ => false,
        }
    }

    pub fn has_fired(&self, id: usize) -> bool {
        self.fired.get(id).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.fired.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fired.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.fired.iter().filter(|f| !**f).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_id_is_ignored() {
        let mut r = RevealRegistry::new();
        assert!(!r.on_visibility(3, true));
        assert!(!r.has_fired(3));
    }
}
