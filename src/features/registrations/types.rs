use serde::Serialize;

/// What happens to the applicant's photo when their registration is approved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoDecision {
    #[default]
    Approve,
    Reject,
}
