use sea_orm::{DbErr, SqlErr};

/// True when the error is a unique-constraint violation (SQLSTATE 23505).
///
/// Drivers surface it as `SqlErr::UniqueConstraintViolation`; mocked and
/// wrapped errors only carry the message, so that is checked as well.
pub fn is_unique_violation(err: &DbErr) -> bool {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }

    let msg = err.to_string();
    msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
}

/// True when the violation message names the given index or constraint.
pub fn violates(err: &DbErr, constraint: &str) -> bool {
    is_unique_violation(err) && err.to_string().contains(constraint)
}
