//! Абстракция и диспетчеризация команд.
//!
//! Содержит трейт [`CommandExecute`] для унифицированного выполнения команд,
//! enum [`Command`] со всеми поддерживаемыми командами и [`Reply`], результат
//! выполнения, который отображается в текст только на границе вывода.

use std::fmt;

use super::{DeleteCommand, GetCommand, PutCommand};
use crate::engine::Storage;

/// Текст, которым выводится отсутствующий ключ.
pub const ABSENT: &str = "None";

pub trait CommandExecute: fmt::Debug {
    /// Выполняет команду над хранилищем и возвращает результат.
    ///
    /// Отсутствие ключа не является ошибкой и возвращается как
    /// [`Reply::Absent`].
    fn execute(
        &self,
        store: &mut dyn Storage,
    ) -> Reply;

    /// Возвращает имя команды для logging
    fn command_name(&self) -> &'static str;

    /// Возвращает ключ команды для logging
    fn command_key(&self) -> i64;
}

/// Результат выполнения одной команды.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// Команда ничего не выводит (`put`).
    Done,
    /// Найденное (или удалённое) значение.
    Value(i64),
    /// Ключ отсутствует.
    Absent,
}

/// Перечисление всех поддерживаемых команд.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Put(PutCommand),
    Get(GetCommand),
    Delete(DeleteCommand),
}

impl Reply {
    /// `true`, если ответ не порождает строку вывода.
    pub fn is_silent(&self) -> bool {
        matches!(self, Reply::Done)
    }

    pub fn from_option(value: Option<i64>) -> Self {
        value.map_or(Reply::Absent, Reply::Value)
    }
}

impl fmt::Display for Reply {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Reply::Done => Ok(()),
            Reply::Value(v) => write!(f, "{v}"),
            Reply::Absent => f.write_str(ABSENT),
        }
    }
}

impl Command {
    fn inner(&self) -> &dyn CommandExecute {
        match self {
            Command::Put(cmd) => cmd,
            Command::Get(cmd) => cmd,
            Command::Delete(cmd) => cmd,
        }
    }
}

impl CommandExecute for Command {
    fn execute(
        &self,
        store: &mut dyn Storage,
    ) -> Reply {
        self.inner().execute(store)
    }

    fn command_name(&self) -> &'static str {
        self.inner().command_name()
    }

    fn command_key(&self) -> i64 {
        self.inner().command_key()
    }
}
