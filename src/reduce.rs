use crate::parser::Parser;
use crate::reader::Reader;
use crate::repeat::{NoSeparator, describe_counts, run};
use crate::result::{ParseResult, Parsed};
use std::borrow::Cow;

/// Parser combinator that repeats a parser and folds the outputs as they
/// arrive, without materializing a vector.
///
/// The fold runs in three phases: `seed` builds the accumulator when the
/// repetition starts, `step` merges each item into it, and `finish` turns
/// the accumulator into the final output. Repetition behavior (counts,
/// separator, rewinding) is identical to [`Repeat`](crate::repeat::Repeat).
pub struct Reduce<P, S, Seed, Step, Finish> {
    parser: P,
    separator: Option<S>,
    min: usize,
    max: usize,
    seed: Seed,
    step: Step,
    finish: Finish,
}

impl<P, Seed, Step, Finish> Reduce<P, NoSeparator, Seed, Step, Finish> {
    /// A reducing repetition of `min..=max` items.
    ///
    /// # Panics
    ///
    /// Panics if `max` is zero or `min` exceeds `max`.
    pub fn new(parser: P, min: usize, max: usize, seed: Seed, step: Step, finish: Finish) -> Self {
        assert!(max >= 1, "maximum repetition count must be at least 1");
        assert!(
            min <= max,
            "minimum repetition count {} exceeds maximum {}",
            min,
            max
        );
        Reduce {
            parser,
            separator: None,
            min,
            max,
            seed,
            step,
            finish,
        }
    }
}

impl<P, S, Seed, Step, Finish> Reduce<P, S, Seed, Step, Finish> {
    /// Requires `separator` between consecutive items.
    pub fn separated_by<S2>(self, separator: S2) -> Reduce<P, S2, Seed, Step, Finish> {
        Reduce {
            parser: self.parser,
            separator: Some(separator),
            min: self.min,
            max: self.max,
            seed: self.seed,
            step: self.step,
            finish: self.finish,
        }
    }
}

impl<'src, P, S, Seed, Step, Finish, A, U> Parser<'src> for Reduce<P, S, Seed, Step, Finish>
where
    P: Parser<'src>,
    S: Parser<'src>,
    Seed: Fn() -> A,
    Step: Fn(&mut A, P::Output),
    Finish: Fn(A) -> U,
{
    type Output = U;

    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, U> {
        let mut accumulator = (self.seed)();
        let run = run(
            &self.parser,
            self.separator.as_ref(),
            self.min,
            self.max,
            reader,
            |value| (self.step)(&mut accumulator, value),
        )?;
        Ok(
            Parsed::new((self.finish)(accumulator), run.start, run.end)
                .with_backtrack(run.can_backtrack),
        )
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Owned(describe_counts(self.min, self.max, self.parser.describe()))
    }
}

/// Convenience function to create a Reduce parser
pub fn reduce<'src, P, Seed, Step, Finish, A, U>(
    parser: P,
    min: usize,
    max: usize,
    seed: Seed,
    step: Step,
    finish: Finish,
) -> Reduce<P, NoSeparator, Seed, Step, Finish>
where
    P: Parser<'src>,
    Seed: Fn() -> A,
    Step: Fn(&mut A, P::Output),
    Finish: Fn(A) -> U,
{
    Reduce::new(parser, min, max, seed, step, finish)
}
