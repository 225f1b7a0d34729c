// safe method invocation over dynamic values
use crate::core::options::StandardizeOptions;
use crate::core::record::{AlgebraError, Record};
use crate::core::sanitation::KeyList;
use crate::core::types::{Key, Sequence, Value, ValueKind};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvokeError {
    #[error("undefined method `{method}` for {kind}")]
    NoMethod { method: String, kind: ValueKind },

    #[error("`{method}` expected {expected}, got {found}")]
    Type {
        method: String,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("wrong number of arguments for `{method}` (given {given}, expected {expected})")]
    Arity {
        method: String,
        given: usize,
        expected: usize,
    },

    #[error("key not found: {key}")]
    KeyNotFound { key: Key },

    #[error(transparent)]
    Algebra(#[from] AlgebraError),
}

impl InvokeError {
    /// Errors that [`try_invoke`] turns into "no value": a missing method or
    /// an argument of the wrong type. Everything else propagates.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            InvokeError::NoMethod { .. }
                | InvokeError::Type { .. }
                | InvokeError::Algebra(AlgebraError::TypeMismatch { .. })
        )
    }
}

/// Calls `method` on `receiver`, returning `Ok(None)` instead of failing
/// when the receiver is `Null`, the method does not exist for the
/// receiver's kind, or an argument has the wrong type.
pub fn try_invoke(receiver: &Value, method: &str, args: &[Value]) -> Result<Option<Value>, InvokeError> {
    if receiver.is_null() {
        return Ok(None);
    }

    match invoke(receiver, method, args) {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.is_recoverable() => {
            tracing::trace!(method, error = %e, "try_invoke absorbed error");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Calls `method` on `receiver` without absorbing anything.
pub fn invoke(receiver: &Value, method: &str, args: &[Value]) -> Result<Value, InvokeError> {
    //methods every value answers to
    match method {
        "class" => {
            arity(method, args, 0)?;
            return Ok(Value::sym(receiver.kind().name()));
        }
        "to_s" => {
            arity(method, args, 0)?;
            return Ok(match receiver {
                Value::Str(s) | Value::Sym(s) => Value::Str(s.clone()),
                Value::Null => Value::Str(String::new()),
                other => Value::Str(other.to_string()),
            });
        }
        "inspect" => {
            arity(method, args, 0)?;
            return Ok(Value::Str(receiver.to_string()));
        }
        _ => {}
    }

    match receiver {
        Value::Str(s) => invoke_text(s, method, args),
        Value::Sym(s) => invoke_symbol(s, method, args),
        Value::Int(_) | Value::Float(_) => invoke_number(receiver, method, args),
        Value::Map(r) => invoke_record(r, method, args),
        Value::List(s) => invoke_sequence(s, method, args),
        Value::Null | Value::Bool(_) => Err(no_method(receiver, method)),
    }
}

fn no_method(receiver: &Value, method: &str) -> InvokeError {
    InvokeError::NoMethod {
        method: method.to_string(),
        kind: receiver.kind(),
    }
}

fn arity(method: &str, args: &[Value], expected: usize) -> Result<(), InvokeError> {
    if args.len() != expected {
        return Err(InvokeError::Arity {
            method: method.to_string(),
            given: args.len(),
            expected,
        });
    }
    Ok(())
}

fn type_error(method: &str, expected: ValueKind, found: &Value) -> InvokeError {
    InvokeError::Type {
        method: method.to_string(),
        expected,
        found: found.kind(),
    }
}

fn invoke_text(s: &str, method: &str, args: &[Value]) -> Result<Value, InvokeError> {
    match method {
        "upcase" => {
            arity(method, args, 0)?;
            Ok(Value::Str(s.to_uppercase()))
        }
        "downcase" => {
            arity(method, args, 0)?;
            Ok(Value::Str(s.to_lowercase()))
        }
        "len" => {
            arity(method, args, 0)?;
            Ok(Value::Int(s.chars().count() as i64))
        }
        "to_sym" => {
            arity(method, args, 0)?;
            Ok(Value::sym(s))
        }
        "+" => {
            arity(method, args, 1)?;
            match &args[0] {
                Value::Str(other) => Ok(Value::Str(format!("{}{}", s, other))),
                other => Err(type_error(method, ValueKind::Str, other)),
            }
        }
        _ => Err(no_method(&Value::Str(s.to_string()), method)),
    }
}

fn invoke_symbol(s: &str, method: &str, args: &[Value]) -> Result<Value, InvokeError> {
    match method {
        "to_sym" => {
            arity(method, args, 0)?;
            Ok(Value::sym(s))
        }
        "len" => {
            arity(method, args, 0)?;
            Ok(Value::Int(s.chars().count() as i64))
        }
        _ => Err(no_method(&Value::sym(s), method)),
    }
}

fn invoke_number(n: &Value, method: &str, args: &[Value]) -> Result<Value, InvokeError> {
    match method {
        "abs" => {
            arity(method, args, 0)?;
            Ok(match n {
                Value::Int(i) => Value::Int(i.wrapping_abs()),
                Value::Float(x) => Value::Float(x.abs()),
                other => return Err(no_method(other, method)),
            })
        }
        "+" | "-" => {
            arity(method, args, 1)?;
            let plus = method == "+";
            match (n, &args[0]) {
                (Value::Int(a), Value::Int(b)) => Ok(Value::Int(if plus {
                    a.wrapping_add(*b)
                } else {
                    a.wrapping_sub(*b)
                })),
                (a, b) => match (as_f64(a), as_f64(b)) {
                    (Some(a), Some(b)) => Ok(Value::Float(if plus { a + b } else { a - b })),
                    _ => Err(type_error(method, n.kind(), b)),
                },
            }
        }
        _ => Err(no_method(n, method)),
    }
}

fn as_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Int(i) => Some(*i as f64),
        Value::Float(x) => Some(*x),
        _ => None,
    }
}

fn sequence_arg<'a>(method: &str, v: &'a Value) -> Result<&'a Sequence, InvokeError> {
    match v {
        Value::List(s) => Ok(s),
        other => Err(type_error(method, ValueKind::List, other)),
    }
}

fn key_arg(method: &str, v: &Value) -> Result<Key, InvokeError> {
    Key::try_from(v).map_err(|_| type_error(method, ValueKind::Str, v))
}

fn invoke_record(r: &Record, method: &str, args: &[Value]) -> Result<Value, InvokeError> {
    let receiver = || Value::Map(r.clone());
    match method {
        "len" => {
            arity(method, args, 0)?;
            Ok(Value::Int(r.len() as i64))
        }
        "keys" => {
            arity(method, args, 0)?;
            Ok(Value::List(r.keys().map(Key::to_value).collect()))
        }
        "values" => {
            arity(method, args, 0)?;
            Ok(Value::List(r.values().cloned().collect()))
        }
        "fetch" => {
            arity(method, args, 1)?;
            let key = key_arg(method, &args[0])?;
            r.get(&key)
                .cloned()
                .ok_or(InvokeError::KeyNotFound { key })
        }
        "+" => {
            arity(method, args, 1)?;
            Ok(receiver().merge(&args[0])?)
        }
        "-" => {
            arity(method, args, 1)?;
            Ok(receiver().subtract(&args[0])?)
        }
        "without" => Ok(Value::Map(r.without(KeyList::nested(args)))),
        "only_with" => Ok(Value::Map(r.only_with(KeyList::nested(args)))),
        "standardize" => {
            //a trailing record is taken as options
            let (keys, options) = match args.split_last() {
                Some((Value::Map(opts), keys)) => (keys, StandardizeOptions::from_record(opts)),
                _ => (args, StandardizeOptions::default()),
            };
            Ok(Value::Map(r.standardize(KeyList::nested(keys), options)?))
        }
        "to_symbolic_keys" => {
            arity(method, args, 0)?;
            Ok(Value::Map(r.to_symbolic_keys()))
        }
        "to_string_keys" => {
            arity(method, args, 0)?;
            Ok(Value::Map(r.to_string_keys()))
        }
        "is_subset_of" => {
            arity(method, args, 1)?;
            Ok(Value::Bool(receiver().is_subset_of(&args[0])?))
        }
        "is_superset_of" => {
            arity(method, args, 1)?;
            Ok(Value::Bool(receiver().is_superset_of(&args[0])?))
        }
        _ => Err(no_method(&receiver(), method)),
    }
}

fn invoke_sequence(s: &Sequence, method: &str, args: &[Value]) -> Result<Value, InvokeError> {
    match method {
        "len" => {
            arity(method, args, 0)?;
            Ok(Value::Int(s.len() as i64))
        }
        "first" => {
            arity(method, args, 0)?;
            Ok(s.get(0).cloned().unwrap_or_default())
        }
        "last" => {
            arity(method, args, 0)?;
            Ok(s.iter().last().cloned().unwrap_or_default())
        }
        "includes" => {
            arity(method, args, 1)?;
            Ok(Value::Bool(s.contains(&args[0])))
        }
        "is_subset_of" => {
            arity(method, args, 1)?;
            Ok(Value::Bool(s.is_subset_of(sequence_arg(method, &args[0])?)))
        }
        "is_superset_of" => {
            arity(method, args, 1)?;
            Ok(Value::Bool(s.is_superset_of(sequence_arg(method, &args[0])?)))
        }
        "scope" | "exclude_scope" => {
            let Some((key, values)) = args.split_first() else {
                return Err(InvokeError::Arity {
                    method: method.to_string(),
                    given: 0,
                    expected: 1,
                });
            };
            let key = key_arg(method, key)?;
            let values = values.iter().cloned();
            Ok(Value::List(if method == "scope" {
                s.scope(key, values)
            } else {
                s.exclude_scope(key, values)
            }))
        }
        _ => Err(no_method(&Value::List(s.clone()), method)),
    }
}
