use std::str::Split;

use crate::{
    primitives::PrimitiveKind,
    signal::{EventSignal, InboundSignal, OutboundSignal, PropUpdate, SignalError},
};

/// Token standing for "reset" in prop values and "append" in `setParent`
pub const NULL_SYMBOL: &str = "$";
/// Separates the fields of one signal
pub const FIELD_SEPARATOR: char = '+';
/// Separates and terminates signals in a batch
pub const SIGNAL_SEPARATOR: char = '|';

/// Renders one outbound signal without the batch terminator
pub fn stringify_signal(signal: &OutboundSignal) -> String {
    match signal {
        OutboundSignal::Create { id, kind } => format!("create+{}+{}", id, kind),
        OutboundSignal::Remove { id } => format!("remove+{}", id),
        OutboundSignal::Update { id, props } => {
            let mut text = format!("update+{}+", id);
            for update in props {
                text.push_str(&update.prop);
                text.push('=');
                text.push_str(update.kind.name());
                text.push('=');
                text.push_str(update.value.as_deref().unwrap_or(NULL_SYMBOL));
                text.push(FIELD_SEPARATOR);
            }
            text
        }
        OutboundSignal::SetParent {
            id,
            parent_id,
            after,
        } => format!(
            "setParent+{}+{}+{}",
            id,
            parent_id,
            after.as_deref().unwrap_or(NULL_SYMBOL)
        ),
    }
}

/// Renders a batch: every signal followed by `|`. An empty batch is `"|"`.
pub fn stringify_signals(signals: &[OutboundSignal]) -> String {
    let mut text = signals
        .iter()
        .map(stringify_signal)
        .collect::<Vec<_>>()
        .join("|");
    text.push(SIGNAL_SEPARATOR);
    text
}

/// Parses one client message into an event.
///
/// The argument is everything after the third separator and may be empty.
pub fn try_parse_inbound(text: &str) -> Result<InboundSignal, SignalError> {
    let mut fields = text.splitn(4, FIELD_SEPARATOR);
    let prefix = fields.next().unwrap_or_default();
    match prefix {
        "event" => {
            let id = required(fields.next(), "event", "id")?;
            let event = required(fields.next(), "event", "event")?;
            let arg = fields.next().unwrap_or_default();
            Ok(InboundSignal::Event(EventSignal {
                id: id.to_string(),
                event: event.to_string(),
                arg: arg.to_string(),
            }))
        }
        _ => Err(SignalError::UnknownSignal {
            prefix: prefix.to_string(),
        }),
    }
}

/// Parses one client message, yielding nothing for anything unrecognized
pub fn parse_inbound(text: &str) -> Option<InboundSignal> {
    try_parse_inbound(text).ok()
}

pub fn stringify_inbound(signal: &InboundSignal) -> String {
    match signal {
        InboundSignal::Event(EventSignal { id, event, arg }) => {
            format!("event+{}+{}+{}", id, event, arg)
        }
    }
}

/// Strict inverse of [`stringify_signals`], for host simulators
pub fn try_parse_outbound(text: &str) -> Result<Vec<OutboundSignal>, SignalError> {
    let body = text
        .strip_suffix(SIGNAL_SEPARATOR)
        .ok_or(SignalError::MissingTerminator)?;
    if body.is_empty() {
        return Ok(Vec::new());
    }
    body.split(SIGNAL_SEPARATOR).map(parse_outbound_signal).collect()
}

fn parse_outbound_signal(text: &str) -> Result<OutboundSignal, SignalError> {
    let mut fields = text.split(FIELD_SEPARATOR);
    let prefix = fields.next().unwrap_or_default();
    let signal = match prefix {
        "create" => OutboundSignal::Create {
            id: required(fields.next(), "create", "id")?.to_string(),
            kind: required(fields.next(), "create", "type")?.to_string(),
        },
        "remove" => OutboundSignal::Remove {
            id: required(fields.next(), "remove", "id")?.to_string(),
        },
        "setParent" => OutboundSignal::SetParent {
            id: required(fields.next(), "setParent", "id")?.to_string(),
            parent_id: required(fields.next(), "setParent", "parentId")?.to_string(),
            after: match required(fields.next(), "setParent", "after")? {
                NULL_SYMBOL => None,
                after => Some(after.to_string()),
            },
        },
        "update" => {
            let id = required(fields.next(), "update", "id")?.to_string();
            let props = parse_prop_updates(&mut fields)?;
            return Ok(OutboundSignal::Update { id, props });
        }
        _ => {
            return Err(SignalError::UnknownSignal {
                prefix: prefix.to_string(),
            })
        }
    };
    if fields.next().is_some() {
        return Err(SignalError::TrailingFields {
            signal: signal.name(),
        });
    }
    Ok(signal)
}

// Each prop token is followed by a separator, so the final field is empty.
fn parse_prop_updates(fields: &mut Split<'_, char>) -> Result<Vec<PropUpdate>, SignalError> {
    let tokens: Vec<&str> = fields.collect();
    match tokens.split_last() {
        Some((&"", tokens)) => tokens.iter().map(|token| parse_prop_update(token)).collect(),
        _ => Err(SignalError::MissingField {
            signal: "update",
            field: "props",
        }),
    }
}

fn parse_prop_update(token: &str) -> Result<PropUpdate, SignalError> {
    let malformed = || SignalError::MalformedProp {
        token: token.to_string(),
    };
    let mut parts = token.splitn(3, '=');
    let prop = parts.next().filter(|p| !p.is_empty()).ok_or_else(malformed)?;
    let kind_name = parts.next().ok_or_else(malformed)?;
    let value = parts.next().ok_or_else(malformed)?;
    let kind =
        PrimitiveKind::from_name(kind_name).ok_or_else(|| SignalError::UnknownPrimitive {
            name: kind_name.to_string(),
        })?;
    Ok(PropUpdate {
        prop: prop.to_string(),
        kind,
        value: (value != NULL_SYMBOL).then(|| value.to_string()),
    })
}

fn required<'a>(
    field: Option<&'a str>,
    signal: &'static str,
    name: &'static str,
) -> Result<&'a str, SignalError> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(SignalError::MissingField {
            signal,
            field: name,
        }),
    }
}
