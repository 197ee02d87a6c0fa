//! Process exit statuses for each command.

use roster_state::{CreateOutcome, DeleteOutcome, LoadOutcome};

/// Command completed
pub const SUCCESS: u8 = 0;
/// Remote call failed or the controller was shut down
pub const FAILURE: u8 = 1;
/// Draft rejected by local validation
pub const INVALID_INPUT: u8 = 2;

pub fn list_status(outcome: &LoadOutcome) -> u8 {
    match outcome {
        LoadOutcome::Loaded(_) => SUCCESS,
        LoadOutcome::Failed | LoadOutcome::Discarded => FAILURE,
    }
}

pub fn create_status(outcome: &CreateOutcome) -> u8 {
    match outcome {
        CreateOutcome::Created(_) => SUCCESS,
        CreateOutcome::Rejected(_) => INVALID_INPUT,
        CreateOutcome::Failed | CreateOutcome::Discarded => FAILURE,
    }
}

pub fn delete_status(outcome: &DeleteOutcome) -> u8 {
    match outcome {
        DeleteOutcome::Deleted => SUCCESS,
        DeleteOutcome::Failed | DeleteOutcome::Discarded => FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{validate_draft, Draft, EntityId};

    #[test]
    fn rejected_draft_exits_with_two() {
        let errors = validate_draft(&Draft::new("", "bad", "c")).unwrap_err();
        assert_eq!(create_status(&CreateOutcome::Rejected(errors)), 2);
    }

    #[test]
    fn create_outcomes() {
        let entity = Draft::new("Bob", "bob@b.com", "bob").with_id(EntityId::new("2"));
        assert_eq!(create_status(&CreateOutcome::Created(entity)), SUCCESS);
        assert_eq!(create_status(&CreateOutcome::Failed), FAILURE);
        assert_eq!(create_status(&CreateOutcome::Discarded), FAILURE);
    }

    #[test]
    fn delete_outcomes() {
        assert_eq!(delete_status(&DeleteOutcome::Deleted), SUCCESS);
        assert_eq!(delete_status(&DeleteOutcome::Failed), FAILURE);
        assert_eq!(delete_status(&DeleteOutcome::Discarded), FAILURE);
    }

    #[test]
    fn list_outcomes() {
        assert_eq!(list_status(&LoadOutcome::Loaded(0)), SUCCESS);
        assert_eq!(list_status(&LoadOutcome::Failed), FAILURE);
        assert_eq!(list_status(&LoadOutcome::Discarded), FAILURE);
    }
}
