use super::execute::{CommandExecute, Reply};
use crate::engine::Storage;

/// `put <key> <value>`: вставка или обновление.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PutCommand {
    pub key: i64,
    pub value: i64,
}

impl CommandExecute for PutCommand {
    fn execute(
        &self,
        store: &mut dyn Storage,
    ) -> Reply {
        store.put(self.key, self.value);
        Reply::Done
    }

    fn command_name(&self) -> &'static str {
        "put"
    }

    fn command_key(&self) -> i64 {
        self.key
    }
}

/// `get <key>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetCommand {
    pub key: i64,
}

impl CommandExecute for GetCommand {
    fn execute(
        &self,
        store: &mut dyn Storage,
    ) -> Reply {
        Reply::from_option(store.get(self.key))
    }

    fn command_name(&self) -> &'static str {
        "get"
    }

    fn command_key(&self) -> i64 {
        self.key
    }
}

/// `delete <key>`: удаляет ключ и возвращает его значение.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCommand {
    pub key: i64,
}

impl CommandExecute for DeleteCommand {
    fn execute(
        &self,
        store: &mut dyn Storage,
    ) -> Reply {
        Reply::from_option(store.delete(self.key))
    }

    fn command_name(&self) -> &'static str {
        "delete"
    }

    fn command_key(&self) -> i64 {
        self.key
    }
}
