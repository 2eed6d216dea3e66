/// Failures the account and post stores can report. The page surfaces these
/// as blocking alerts, so each variant carries a ready user-facing message.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    EmptyField,
    DuplicateAccount,
    InvalidCredentials,
    SignInRequired,
    NotFound,
}

impl StoreError {
    pub fn user_message(&self) -> &'static str {
        match self {
            StoreError::EmptyField => "Fill in all fields!",
            StoreError::DuplicateAccount => "That user already exists!",
            StoreError::InvalidCredentials => "Wrong username or password!",
            StoreError::SignInRequired => "Sign in to continue",
            StoreError::NotFound => "That post is gone",
        }
    }
}
