//! Authenticated session state
//!
//! Role strings enter the system here and nowhere else: the backend's raw
//! spelling is normalized into the closed [`Role`] enum once, at hydration.
//! Every later check works on the enum and the permission set.

use shared::client::{LoginResponse, UserInfo};
use shared::permissions::{PermissionSet, Role, derive_role};

/// An authenticated console session.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
    pub role: Role,
    pub permissions: PermissionSet,
}

impl Session {
    /// Hydrate a session from a login response.
    ///
    /// An unknown or missing role string falls back to deriving the role
    /// from the granted permissions, so a malformed account still gets a
    /// sensible access level instead of an error.
    pub fn hydrate(login: LoginResponse) -> Self {
        let permissions: PermissionSet = login.user.permissions.iter().cloned().collect();
        let role = Role::parse(&login.user.role).unwrap_or_else(|| derive_role(&permissions));
        Self {
            token: login.token,
            user: login.user,
            role,
            permissions,
        }
    }
}
