//! Key extraction used to locate a step inside its sequence.

use adv_protocol::StepDef;

/// Maps a step to the key used for position lookup.
///
/// Two steps are considered the same position when their keys compare equal;
/// identity is never used. Any `Fn(&S) -> K` with `K: PartialEq` is a
/// selector.
pub trait StepSelector<S> {
    type Key: PartialEq;

    fn select(&self, step: &S) -> Self::Key;
}

impl<S, K, F> StepSelector<S> for F
where
    F: Fn(&S) -> K,
    K: PartialEq,
{
    type Key = K;

    fn select(&self, step: &S) -> K {
        self(step)
    }
}

/// Selector for [`StepDef`] keyed by `id`.
pub fn by_id(step: &StepDef) -> String {
    step.id.clone()
}

/// Position of the first step whose key equals the key of `step`.
pub fn index_of<S, Sel>(steps: &[S], selector: &Sel, step: &S) -> Option<usize>
where
    Sel: StepSelector<S> + ?Sized,
{
    let key = selector.select(step);
    steps.iter().position(|candidate| selector.select(candidate) == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Card {
        id: &'static str,
        label: &'static str,
    }

    #[test]
    fn test_index_of_uses_key_equality() {
        let steps = vec![
            Card { id: "a", label: "one" },
            Card { id: "b", label: "two" },
        ];
        // A different value with the same key resolves to the same position.
        let lookalike = Card {
            id: "b",
            label: "something else",
        };

        let selector = |card: &Card| card.id;
        assert_eq!(index_of(&steps, &selector, &lookalike), Some(1));
        assert_eq!(steps[1].label, "two");
    }

    #[test]
    fn test_index_of_missing_key() {
        let steps = vec![StepDef::new("a", "A")];
        assert_eq!(index_of(&steps, &by_id, &StepDef::new("z", "Z")), None);
    }
}
