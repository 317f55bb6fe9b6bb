use crate::account::application::domain::entities::UserId;
use crate::circle::application::domain::entities::{Circle, Subscription};
use crate::shared::permissions::{allow_if, Denial, Permission};

pub const CIRCLE_NOT_ACTIVE: Denial = Denial {
    code: "CIRCLE_NOT_ACTIVE",
    message: "This circle is not active.",
};

pub const NOT_CIRCLE_ADMIN: Denial = Denial {
    code: "NOT_CIRCLE_ADMIN",
    message: "Only the circle admins can perform this action.",
};

pub const NOT_CIRCLE_MEMBER: Denial = Denial {
    code: "NOT_CIRCLE_MEMBER",
    message: "Only the members circle can perform this action.",
};

pub const NOT_SUBSCRIPTION_OWNER: Denial = Denial {
    code: "NOT_SUBSCRIPTION_OWNER",
    message: "Only the owner subscription can perform this action.",
};

pub fn is_circle_active(circle: &Circle) -> Permission {
    allow_if(circle.is_active, CIRCLE_NOT_ACTIVE)
}

/// `membership` is the requester's subscription to the circle, if any.
pub fn is_circle_admin(membership: Option<&Subscription>) -> Permission {
    allow_if(membership.is_some_and(|s| s.is_admin), NOT_CIRCLE_ADMIN)
}

pub fn is_circle_member(membership: Option<&Subscription>) -> Permission {
    allow_if(membership.is_some(), NOT_CIRCLE_MEMBER)
}

pub fn is_subscription_owner(requester: UserId, subscription: &Subscription) -> Permission {
    allow_if(subscription.user_id == requester, NOT_SUBSCRIPTION_OWNER)
}


#[cfg(test)]
mod tests {
    use super::test_fixtures::{circle, subscription};
    use super::*;
    use crate::shared::permissions::check_all;
    use uuid::Uuid;

    fn user() -> UserId {
        UserId::from(Uuid::new_v4())
    }

    #[test]
    fn inactive_circle_is_denied() {
        let mut c = circle("quito");
        assert_eq!(is_circle_active(&c), Ok(()));

        c.is_active = false;
        assert_eq!(is_circle_active(&c), Err(CIRCLE_NOT_ACTIVE));
    }

    #[test]
    fn admin_requires_admin_membership() {
        let c = circle("quito");
        let member = subscription(user(), &c, false);
        let admin = subscription(user(), &c, true);

        assert_eq!(is_circle_admin(Some(&admin)), Ok(()));
        assert_eq!(is_circle_admin(Some(&member)), Err(NOT_CIRCLE_ADMIN));
        assert_eq!(is_circle_admin(None), Err(NOT_CIRCLE_ADMIN));
    }

    #[test]
    fn member_requires_any_membership() {
        let c = circle("quito");
        let member = subscription(user(), &c, false);

        assert_eq!(is_circle_member(Some(&member)), Ok(()));
        assert_eq!(is_circle_member(None), Err(NOT_CIRCLE_MEMBER));
    }

    #[test]
    fn only_subscribed_user_owns_subscription() {
        let c = circle("quito");
        let owner = user();
        let sub = subscription(owner, &c, false);

        assert_eq!(is_subscription_owner(owner, &sub), Ok(()));
        assert_eq!(
            is_subscription_owner(user(), &sub),
            Err(NOT_SUBSCRIPTION_OWNER)
        );
    }

    #[test]
    fn inactive_check_reported_before_admin() {
        let mut c = circle("quito");
        c.is_active = false;

        assert_eq!(
            check_all([is_circle_active(&c), is_circle_admin(None)]),
            Err(CIRCLE_NOT_ACTIVE)
        );
    }
}
