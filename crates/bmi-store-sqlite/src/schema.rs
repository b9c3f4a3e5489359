//! SQL schema for the BMI history store.
//!
//! The table layout is kept compatible with existing `bmiDB.db` files:
//! numeric columns carry `INT` affinity, which still stores fractional
//! values as REAL, and `logDate` is a Julian day number.

/// History table DDL; idempotent thanks to `IF NOT EXISTS`.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS bmiCalc (
    id      INTEGER PRIMARY KEY NOT NULL,
    weight  INT,
    height  INT,
    bmi     INT,
    logDate REAL                 -- julianday('now'); store-assigned
);

CREATE INDEX IF NOT EXISTS bmiCalc_logDate_idx ON bmiCalc(logDate);
";

pub const INSERT_RECORD: &str = "
INSERT INTO bmiCalc (weight, height, bmi, logDate)
VALUES (?1, ?2, ?3, julianday('now'))
";

/// Newest first. `id` breaks ties between rows logged in the same instant.
pub const SELECT_HISTORY: &str = "
SELECT id, weight, height, bmi, date(logDate)
FROM bmiCalc
ORDER BY logDate DESC, id DESC
";
