//! In-memory resource stores
//!
//! Each store owns the fetched list for one resource and the service that
//! feeds it. Writes are awaited sequentially: perform the write, then
//! refetch (or patch the list in place where the backend returns the
//! record). A failed write leaves the in-memory list untouched. The one
//! exception is the optimistic path in the user store, which flips locally
//! first and reverts by refetching.

mod categories;
mod memberships;
mod products;
mod users;

pub use categories::CategoryStore;
pub use memberships::MembershipStore;
pub use products::ProductStore;
pub use users::UserStore;
