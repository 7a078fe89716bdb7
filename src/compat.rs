//! Backfills the own name of native function values.
//!
//! Rust callables carry no runtime name, so the name is recovered from the
//! compiler's type path for the callable (`crate::module::function_name`).
//! Closures and function pointers have no usable path and stay anonymous.

use nom::{
    IResult, Parser as NomParser,
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, satisfy},
    combinator::{all_consuming, map, opt, recognize},
    multi::{many0, separated_list1},
    sequence::{delimited, pair},
};
use std::any::type_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Ident(&'a str),
    /// Compiler-generated segment such as `{{closure}}`.
    Anonymous,
}

pub fn function_name<F>() -> Option<String> {
    name_from_type_path(type_name::<F>())
}

pub fn name_from_type_path(path: &str) -> Option<String> {
    let (_, segments) = parse_path(path).ok()?;
    match segments.last() {
        Some(Segment::Ident(name)) => Some((*name).to_string()),
        _ => None,
    }
}

fn parse_path(input: &str) -> IResult<&str, Vec<Segment<'_>>> {
    all_consuming(separated_list1(tag("::"), parse_segment)).parse(input)
}

fn parse_segment(input: &str) -> IResult<&str, Segment<'_>> {
    let (input, segment) = alt((
        map(identifier, Segment::Ident),
        map(delimited(tag("{{"), identifier, tag("}}")), |_| {
            Segment::Anonymous
        }),
    ))
    .parse(input)?;
    let (input, _) = opt(generic_args).parse(input)?;
    Ok((input, segment))
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c: char| c.is_alphabetic() || c == '_'),
        take_while(|c: char| c.is_alphanumeric() || c == '_'),
    ))
    .parse(input)
}

fn generic_args(input: &str) -> IResult<&str, &str> {
    recognize(delimited(
        char('<'),
        many0(alt((take_while1(|c: char| c != '<' && c != '>'), generic_args))),
        char('>'),
    ))
    .parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{Object, RuntimeResult, Value};

    fn area(_: &Object, _: &[Value]) -> RuntimeResult<Value> {
        Ok(Value::Int(0))
    }

    fn name_of<F: Fn(&Object, &[Value]) -> RuntimeResult<Value>>(_: &F) -> Option<String> {
        function_name::<F>()
    }

    #[test]
    fn fn_items_expose_their_name() {
        assert_eq!(name_of(&area).as_deref(), Some("area"));
    }

    #[test]
    fn closures_are_anonymous() {
        let closure = |_: &Object, _: &[Value]| -> RuntimeResult<Value> { Ok(Value::Null) };
        assert_eq!(name_of(&closure), None);
    }

    #[test]
    fn function_pointers_are_anonymous() {
        let pointer: fn(&Object, &[Value]) -> RuntimeResult<Value> = area;
        assert_eq!(name_of(&pointer), None);
    }

    #[test]
    fn generic_segments_are_skipped() {
        assert_eq!(
            name_from_type_path("demo::Holder<alloc::vec::Vec<u8>>::build").as_deref(),
            Some("build")
        );
        assert_eq!(name_from_type_path("demo::run<i32>::{{closure}}"), None);
        assert_eq!(name_from_type_path(""), None);
    }
}
