use crate::error::StoreError;
use crate::models::User;
use crate::repo::UserStore;

/// In-process [`UserStore`]. Contents are lost when it is dropped.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    users: Vec<User>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }
}

impl UserStore for MemoryStore {
    fn list(&self) -> &[User] {
        &self.users
    }

    fn add(&mut self, user: User) -> Result<(), StoreError> {
        if self.position(&user.id).is_some() {
            return Err(StoreError::DuplicateId(user.id));
        }
        self.users.push(user);
        Ok(())
    }

    fn update(&mut self, user: User) -> Result<(), StoreError> {
        let index = self
            .position(&user.id)
            .ok_or_else(|| StoreError::NotFound(user.id.clone()))?;
        self.users[index] = user;
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<User, StoreError> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(self.users.remove(index))
    }
}
