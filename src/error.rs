/// Errors that can stop the locomotion core from activating.
///
/// Deliberately small: every failure past initialization degrades to a
/// fallback frame or a raw passthrough instead of surfacing an error
/// (missing trackers, missing bones, and a head pose that stops
/// resolving mid-session are all handled inline).
#[derive(Debug, thiserror::Error)]
pub enum LocomotionError {
    #[error("head anchor could not be located")]
    HeadAnchorUnavailable,
}
