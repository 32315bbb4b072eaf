use memegen_core::error::MemeError;
use memegen_core::workflow::{ButtonGates, WorkflowEvent, WorkflowState};

#[test]
fn test_default_state_is_no_image() {
    assert_eq!(WorkflowState::default(), WorkflowState::NoImage);
}

#[test]
fn test_load_from_every_state() {
    for state in [
        WorkflowState::NoImage,
        WorkflowState::ImageLoaded,
        WorkflowState::MemeGenerated,
    ] {
        assert_eq!(
            state.apply(WorkflowEvent::Load).unwrap(),
            WorkflowState::ImageLoaded
        );
    }
}

#[test]
fn test_generate_then_reset_cycle() {
    let state = WorkflowState::NoImage
        .apply(WorkflowEvent::Load)
        .unwrap()
        .apply(WorkflowEvent::Generate)
        .unwrap();
    assert_eq!(state, WorkflowState::MemeGenerated);

    let state = state.apply(WorkflowEvent::Read).unwrap();
    assert_eq!(state, WorkflowState::MemeGenerated);

    let state = state.apply(WorkflowEvent::Reset).unwrap();
    assert_eq!(state, WorkflowState::ImageLoaded);

    let state = state.apply(WorkflowEvent::Generate).unwrap();
    assert_eq!(state, WorkflowState::MemeGenerated);
}

#[test]
fn test_rejected_transitions() {
    let rejected = [
        (WorkflowState::NoImage, WorkflowEvent::Generate),
        (WorkflowState::NoImage, WorkflowEvent::Reset),
        (WorkflowState::NoImage, WorkflowEvent::Read),
        (WorkflowState::ImageLoaded, WorkflowEvent::Reset),
        (WorkflowState::ImageLoaded, WorkflowEvent::Read),
        (WorkflowState::MemeGenerated, WorkflowEvent::Generate),
    ];
    for (state, event) in rejected {
        match state.apply(event) {
            Err(MemeError::InvalidTransition {
                event: e,
                state: s,
            }) => {
                assert_eq!(e, event);
                assert_eq!(s, state);
            }
            other => panic!("{state:?} + {event:?} should be rejected, got {other:?}"),
        }
    }
}

#[test]
fn test_gates_per_state() {
    assert_eq!(WorkflowState::NoImage.gates(), ButtonGates::default());
    assert_eq!(
        WorkflowState::ImageLoaded.gates(),
        ButtonGates {
            submit: true,
            reset: false,
            read: false,
        }
    );
    assert_eq!(
        WorkflowState::MemeGenerated.gates(),
        ButtonGates {
            submit: false,
            reset: true,
            read: true,
        }
    );
}

#[test]
fn test_transition_error_message() {
    let err = WorkflowState::NoImage
        .apply(WorkflowEvent::Generate)
        .unwrap_err();
    assert_eq!(err.to_string(), "Cannot generate while no image is loaded");
}
