//! Разбор команд из потока токенов.
//!
//! Токены разделяются любыми пробельными символами, поэтому команда может
//! занимать одну строку или быть разбита на несколько.

use super::{Command, DeleteCommand, GetCommand, PutCommand};
use crate::error::ParseError;

/// Читает одну команду из итератора токенов.
///
/// Возвращает `Ok(None)`, если токены закончились до имени команды.
pub fn parse_command<I, S>(tokens: &mut I) -> Result<Option<Command>, ParseError>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    let Some(name) = tokens.next() else {
        return Ok(None);
    };

    let cmd = match name.as_ref() {
        "put" => {
            let key = parse_int(tokens.next(), "put", "key")?;
            let value = parse_int(tokens.next(), "put", "value")?;
            Command::Put(PutCommand { key, value })
        }
        "get" => Command::Get(GetCommand {
            key: parse_int(tokens.next(), "get", "key")?,
        }),
        "delete" => Command::Delete(DeleteCommand {
            key: parse_int(tokens.next(), "delete", "key")?,
        }),
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };

    Ok(Some(cmd))
}

/// Разбирает одну строку целиком. Лишние токены в конце строки считаются ошибкой.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let mut tokens = line.split_whitespace();
    let cmd = parse_command(&mut tokens)?;

    match tokens.next() {
        None => Ok(cmd),
        Some(extra) => Err(ParseError::TrailingInput(extra.to_string())),
    }
}

fn parse_int<S: AsRef<str>>(
    token: Option<S>,
    command: &'static str,
    argument: &'static str,
) -> Result<i64, ParseError> {
    let token = token.ok_or(ParseError::MissingArgument { command, argument })?;
    let token = token.as_ref();

    token.parse().map_err(|_| ParseError::InvalidInteger {
        argument,
        value: token.to_string(),
    })
}
