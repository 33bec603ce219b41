/* ============================== Name matching ============================== */

const TEST_MARKER: &str = ".test.";
const STORY_MARKER: &str = ".stories.";

/// What kind of companion file an auxiliary name denotes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuxiliaryRole {
    Test,
    Story,
}

/// Portion of a file name before its first `.`; the whole name if there is none.
#[must_use]
pub fn stem(label: &str) -> &str {
    label.split_once('.').map_or(label, |(head, _)| head)
}

/// True for names that are themselves test or story files.
#[must_use]
pub fn is_auxiliary_name(label: &str) -> bool {
    label.contains(TEST_MARKER) || label.contains(STORY_MARKER)
}

/// Test/story classification of a name, `None` for plain files.
///
/// A name carrying both markers counts as a test.
#[must_use]
pub fn classify(label: &str) -> Option<AuxiliaryRole> {
    if label.contains(TEST_MARKER) {
        Some(AuxiliaryRole::Test)
    } else if label.contains(STORY_MARKER) {
        Some(AuxiliaryRole::Story)
    } else {
        None
    }
}

/// Whether `candidate` is the test or story counterpart of `component`.
///
/// The check is a prefix test against the full dotted token, so
/// `ButtonGroup.test.tsx` is not a companion of `Button.tsx`.
#[must_use]
pub fn matches(component: &str, candidate: &str) -> bool {
    let Some(rest) = candidate.strip_prefix(stem(component)) else {
        return false;
    };
    rest.starts_with(TEST_MARKER) || rest.starts_with(STORY_MARKER)
}
