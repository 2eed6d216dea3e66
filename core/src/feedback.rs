use once_cell::sync::Lazy;
use regex::Regex;

// Same shape the original page accepted.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidEmail,
    ChallengeNotSolved,
    ChallengeLoadFailure,
    NetworkFailure,
}

impl FeedbackError {
    pub fn user_message(&self) -> &'static str {
        match self {
            FeedbackError::InvalidEmail => "Please enter a valid email",
            FeedbackError::ChallengeNotSolved => "Please confirm you are not a robot",
            FeedbackError::ChallengeLoadFailure => "The security check failed to load",
            FeedbackError::NetworkFailure => "Sending failed. Try again later.",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Feedback {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Feedback {
    pub fn validate(&self) -> Result<(), FeedbackError> {
        if !EMAIL_RE.is_match(&self.email) {
            return Err(FeedbackError::InvalidEmail);
        }
        Ok(())
    }

    /// `application/x-www-form-urlencoded` payload for the outbound POST.
    pub fn form_body(&self) -> String {
        format!(
            "name={}&email={}&message={}",
            urlencoding::encode(&self.name),
            urlencoding::encode(&self.email),
            urlencoding::encode(&self.message)
        )
    }
}

/// Gate on the third-party anti-automation widget: it must have loaded, and
/// the visitor must have solved it.
pub fn check_challenge(loaded: bool, solved: bool) -> Result<(), FeedbackError> {
    if !loaded {
        return Err(FeedbackError::ChallengeLoadFailure);
    }
    if !solved {
        return Err(FeedbackError::ChallengeNotSolved);
    }
    Ok(())
}

/// Any OK-range status is a success; everything else reads as a network
/// failure, including the 4xx family.
pub fn submission_outcome(status: u16) -> Result<(), FeedbackError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FeedbackError::NetworkFailure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(email: &str) -> Feedback {
        Feedback {
            name: "Alice".to_owned(),
            email: email.to_owned(),
            message: "hi there".to_owned(),
        }
    }

    #[test]
    fn accepts_plausible_emails() {
        assert_eq!(feedback("alice@example.com").validate(), Ok(()));
        assert_eq!(feedback("a.b+c@mail.co.uk").validate(), Ok(()));
    }

    #[test]
    fn rejects_malformed_emails() {
        for bad in ["", "alice", "alice@", "@example.com", "a b@example.com", "alice@nodot"] {
            assert_eq!(
                feedback(bad).validate(),
                Err(FeedbackError::InvalidEmail),
                "expected rejection of {:?}",
                bad
            );
        }
    }

    #[test]
    fn form_body_is_urlencoded() {
        let body = Feedback {
            name: "Alice Smith".to_owned(),
            email: "alice@example.com".to_owned(),
            message: "hi & bye".to_owned(),
        }
        .form_body();

        assert_eq!(
            body,
            "name=Alice%20Smith&email=alice%40example.com&message=hi%20%26%20bye"
        );
    }

    #[test]
    fn challenge_gate_orders_its_failures() {
        assert_eq!(check_challenge(false, false), Err(FeedbackError::ChallengeLoadFailure));
        assert_eq!(check_challenge(true, false), Err(FeedbackError::ChallengeNotSolved));
        assert_eq!(check_challenge(true, true), Ok(()));
    }

    #[test]
    fn only_ok_range_statuses_succeed() {
        assert_eq!(submission_outcome(200), Ok(()));
        assert_eq!(submission_outcome(204), Ok(()));
        assert_eq!(submission_outcome(299), Ok(()));
        assert_eq!(submission_outcome(302), Err(FeedbackError::NetworkFailure));
        assert_eq!(submission_outcome(404), Err(FeedbackError::NetworkFailure));
        assert_eq!(submission_outcome(500), Err(FeedbackError::NetworkFailure));
    }
}
