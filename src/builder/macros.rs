//! Macros for writing event sequences.

/// Build a single [`Event`](crate::engine::Event) from a calculator token.
///
/// Digits are integer literals `0`..=`9`; operators are `+ - * /`; `.` is
/// the decimal point, `=` evaluates, `neg` toggles the sign and `AC` clears.
///
/// # Example
///
/// ```
/// use keycalc::core::Operator;
/// use keycalc::engine::Event;
/// use keycalc::event;
///
/// assert_eq!(event!(*), Event::SelectOperator(Operator::Multiply));
/// assert_eq!(event!(AC), Event::Clear);
/// ```
#[macro_export]
macro_rules! event {
    (+) => {
        $crate::engine::Event::SelectOperator($crate::core::Operator::Add)
    };
    (-) => {
        $crate::engine::Event::SelectOperator($crate::core::Operator::Subtract)
    };
    (*) => {
        $crate::engine::Event::SelectOperator($crate::core::Operator::Multiply)
    };
    (/) => {
        $crate::engine::Event::SelectOperator($crate::core::Operator::Divide)
    };
    (.) => {
        $crate::engine::Event::Decimal
    };
    (=) => {
        $crate::engine::Event::Evaluate
    };
    (neg) => {
        $crate::engine::Event::ToggleSign
    };
    (AC) => {
        $crate::engine::Event::Clear
    };
    ($digit:literal) => {
        match $crate::core::Digit::new($digit) {
            Some(digit) => $crate::engine::Event::Digit(digit),
            None => panic!(concat!("not a single digit: ", stringify!($digit))),
        }
    };
}

/// Build a `Vec<Event>` from whitespace-separated calculator tokens.
///
/// Each token is one [`event!`]; multi-digit numbers are written digit by
/// digit.
///
/// # Example
///
/// ```
/// use keycalc::engine::Engine;
/// use keycalc::events;
///
/// let mut engine = Engine::new();
/// assert_eq!(engine.handle_all(events![1 2 + 3 . 5 =]), "15,5");
/// ```
#[macro_export]
macro_rules! events {
    ($($token:tt)*) => {
        vec![$($crate::event!($token)),*]
    };
}
