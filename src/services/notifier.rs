use crate::entities::subscription_plans::PlanType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Builds transactional emails and hands them to the log.
///
/// There is no mail transport; dispatch never fails the calling request.
#[derive(Clone, Default)]
pub struct Notifier;

impl Notifier {
    pub fn new() -> Self {
        Self
    }

    pub fn send_welcome(&self, to: &str, name: &str) {
        self.dispatch(welcome_email(to, name));
    }

    pub fn send_subscription_confirmation(&self, to: &str, name: &str, plan: PlanType) {
        self.dispatch(subscription_confirmation_email(to, name, plan));
    }

    pub fn send_referral_invitation(&self, to: &str, referrer_name: &str, code: &str) {
        self.dispatch(referral_invitation_email(to, referrer_name, code));
    }

    fn dispatch(&self, email: Email) {
        log::info!(
            "Email queued to={} subject={:?} body_len={}",
            email.to,
            email.subject,
            email.body.len()
        );
        log::debug!("Email body for {}:\n{}", email.to, email.body);
    }
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn welcome_email(to: &str, name: &str) -> Email {
    Email {
        to: to.to_string(),
        subject: "Welcome to Freskin - your fresh skincare journey begins!".to_string(),
        body: format!(
            "Dear {name},\n\n\
             Welcome to the Freskin family! We're thrilled to have you on board for your \
             fresh, chemical-free skincare journey.\n\n\
             What makes Freskin special:\n\
             - 100% preservative-free products made fresh daily\n\
             - Natural ingredients sourced from local organic farms\n\
             - Delivered fresh to your doorstep\n\
             - Personalized for your unique skin needs\n\n\
             Next steps:\n\
             1. Complete your skin analysis quiz\n\
             2. Set your delivery preferences\n\
             3. Choose your subscription plan\n\n\
             Fresh regards,\nThe Freskin Team\n"
        ),
    }
}

pub fn subscription_confirmation_email(to: &str, name: &str, plan: PlanType) -> Email {
    let plan = title_case(&plan.to_string());
    Email {
        to: to.to_string(),
        subject: format!("Freskin {plan} subscription confirmed!"),
        body: format!(
            "Hi {name},\n\n\
             Your Freskin {plan} subscription is now active!\n\n\
             What to expect:\n\
             - Fresh products delivered daily\n\
             - Weather-adapted formulations\n\
             - Eco-friendly packaging\n\n\
             Your first delivery will arrive tomorrow morning between 6-9 AM.\n\n\
             Fresh wishes,\nTeam Freskin\n"
        ),
    }
}

pub fn referral_invitation_email(to: &str, referrer_name: &str, code: &str) -> Email {
    Email {
        to: to.to_string(),
        subject: format!("{referrer_name} wants you to try Freskin - fresh skincare delivered daily!"),
        body: format!(
            "Hi there!\n\n\
             Your friend {referrer_name} thinks you'd love Freskin, daily fresh skincare \
             delivered to your door.\n\n\
             Use code {code} when you sign up and get Rs 200 off your first order!\n\n\
             Fresh regards,\nTeam Freskin\n"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_confirmation_names_plan() {
        let email = subscription_confirmation_email("a@b.co", "Asha", PlanType::Premium);
        assert_eq!(email.subject, "Freskin Premium subscription confirmed!");
        assert!(email.body.starts_with("Hi Asha,"));
    }

    #[test]
    fn test_referral_invitation_carries_code() {
        let email = referral_invitation_email("friend@b.co", "Asha", "FRESH1ABCDEF");
        assert_eq!(email.to, "friend@b.co");
        assert!(email.body.contains("FRESH1ABCDEF"));
        assert!(email.subject.starts_with("Asha "));
    }
}
