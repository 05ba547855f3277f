//! Profile selection shared across navigation.
//!
//! Independent of the auth session: pages use it to hand a user record to
//! the profile view without re-fetching it.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use crate::net::types::UserRecord;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    pub logged: bool,
    pub user: Option<UserRecord>,
}

impl UserState {
    pub fn set_user(&mut self, user: UserRecord) {
        self.user = Some(user);
        self.logged = true;
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.logged = false;
    }
}
