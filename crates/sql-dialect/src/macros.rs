#[macro_export]
macro_rules! lit {
    ($val:expr) => {
        $crate::ast::Node::value($val)
    };
}

#[macro_export]
macro_rules! name {
    ($name:expr) => {
        $crate::ast::Node::name($name)
    };
}

#[macro_export]
macro_rules! plain {
    ($sql:expr) => {
        $crate::ast::Node::plain($sql)
    };
}

/// Creates an operator expression: `op!(":and", lhs, rhs)`.
#[macro_export]
macro_rules! op {
    ($token:expr $(, $operand:expr)* $(,)?) => {
        $crate::ast::Node::op($token, vec![$($operand),*])
    };
}

/// Creates a field condition from its shorthand forms.
///
/// `field!("score", 10)` compares for equality; `field!("score", :in, [1, 2])`
/// tests list membership; `field!("score", ":between", lit!(90), lit!(100))`
/// applies any operator to the field.
#[macro_export]
macro_rules! field {
    ($name:expr, :in, [$($val:expr),* $(,)?]) => {
        $crate::ast::Node::field_in($name, vec![$($val.into()),*])
    };
    ($name:expr, $token:expr $(, $operand:expr)+ $(,)?) => {
        $crate::ast::Node::field_op($name, $token, vec![$($operand),+])
    };
    ($name:expr, $val:expr) => {
        $crate::ast::Node::field($name, $val)
    };
}
