use chumsky::prelude::*;

use crate::{
    ActuatorOp, Face, FlipCount, LogicalMove, MoveAmount, NotationError, OpSequence,
    TranslateError, TurnAmount,
};

type RichError<'src> = Rich<'src, char, SimpleSpan>;
type ParseExtra<'src> = extra::Err<RichError<'src>>;

/// Trait alias for parser.
trait NotationParser<'src, O>: Clone + Parser<'src, &'src str, O, ParseExtra<'src>> {}
impl<'src, O, T> NotationParser<'src, O> for T where
    T: Clone + Parser<'src, &'src str, O, ParseExtra<'src>>
{
}

/// Parses a solver solution such as `U2 L1 R3` into a list of moves.
///
/// Whitespace between moves is optional.
pub fn parse_solution(s: &str) -> Result<Vec<LogicalMove>, TranslateError> {
    if s.trim().is_empty() {
        return Err(TranslateError::EmptySolution);
    }
    logical_move()
        .padded()
        .repeated()
        .collect::<Vec<_>>()
        .then_ignore(end())
        .parse(s)
        .into_result()
        .map_err(notation_errors)
}

/// Parses a string of actuator primitives such as `F1R1S3`.
///
/// Whitespace between primitives is allowed. An empty string is an empty
/// sequence.
pub fn parse_ops(s: &str) -> Result<OpSequence, TranslateError> {
    actuator_op()
        .padded()
        .repeated()
        .collect::<Vec<_>>()
        .padded()
        .then_ignore(end())
        .map(OpSequence)
        .parse(s)
        .into_result()
        .map_err(notation_errors)
}

fn notation_errors(errs: Vec<RichError<'_>>) -> TranslateError {
    TranslateError::Parse(
        errs.into_iter()
            .map(|e| NotationError {
                span: e.span().into_range(),
                reason: e.reason().to_string(),
            })
            .collect(),
    )
}

fn logical_move<'src>() -> impl NotationParser<'src, LogicalMove> {
    let face = any()
        .try_map(|c: char, span| {
            Face::from_letter(c).ok_or_else(|| Rich::custom(span, format!("unknown face: {c}")))
        })
        .labelled("face");

    let amount = any()
        .try_map(|c: char, span| {
            MoveAmount::from_digit(c)
                .ok_or_else(|| Rich::custom(span, format!("unknown turn amount: {c}")))
        })
        .labelled("turn amount");

    face.then(amount)
        .map(|(face, amount)| LogicalMove { face, amount })
        .labelled("move")
}

fn actuator_op<'src>() -> impl NotationParser<'src, ActuatorOp> {
    let flip_count = any()
        .try_map(|c: char, span| {
            c.to_digit(10)
                .and_then(|n| FlipCount::new(n as u8))
                .ok_or_else(|| Rich::custom(span, format!("invalid flip count: {c}")))
        })
        .labelled("flip count");

    let turn_amount = any()
        .try_map(|c: char, span| {
            TurnAmount::from_digit(c)
                .ok_or_else(|| Rich::custom(span, format!("invalid turn amount: {c}")))
        })
        .labelled("turn amount");

    choice((
        just('F').ignore_then(flip_count).map(ActuatorOp::Flip),
        just('S')
            .ignore_then(turn_amount.clone())
            .map(ActuatorOp::Spin),
        just('R').ignore_then(turn_amount).map(ActuatorOp::Rotate),
    ))
    .labelled("actuator op")
}
