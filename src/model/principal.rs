/// Authenticated identity resolved for one request.
///
/// Attached to the request as an extension by the authentication stage and
/// read by page handlers when building render contexts. Never stored on
/// shared process state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i32,
    pub email: String,
}
