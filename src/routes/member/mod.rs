mod handler;

pub use handler::{add_member, delete_member, get_member, list_members, update_member};
