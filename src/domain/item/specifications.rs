use crate::domain::item::entity::Item;
use crate::domain::user::UserId;

/// Only the owner may edit or delete an item.
pub struct CanModifyItemSpec<'a> {
    item: &'a Item,
    user_id: UserId,
}

impl<'a> CanModifyItemSpec<'a> {
    pub fn new(item: &'a Item, user_id: UserId) -> Self {
        Self { item, user_id }
    }

    pub fn is_satisfied(&self) -> bool {
        self.item.is_owned_by(self.user_id)
    }
}
