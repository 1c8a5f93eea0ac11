/// The three fields of one contact form POST, exactly as submitted.
///
/// Fields are raw strings on purpose: the contact form reports every
/// validation problem through one generic error, so nothing is rejected
/// before the contact service has seen the whole submission. A submission is
/// never persisted and only lives for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}
