//! Reference documentation for the sql2mongo CLI

use super::CliError;

/// Available documentation topics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocTopic {
    Grammar,
    Operators,
    Literals,
}

impl DocTopic {
    /// Parse topic name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "grammar" | "syntax" | "statements" => Some(Self::Grammar),
            "operators" | "ops" | "filters" => Some(Self::Operators),
            "literals" | "values" | "types" => Some(Self::Literals),
            _ => None,
        }
    }
}

/// Get the docs overview (topic listing)
pub fn get_docs_overview() -> &'static str {
    r#"SQL2MONGO DOCUMENTATION

sql2mongo translates a single SQL statement into the equivalent MongoDB
shell command. Only the first statement is read; anything after it is
ignored.

DOCUMENTATION TOPICS

  grammar           Supported statements and clauses
  operators         How WHERE conditions become query filters
  literals          Strings, numbers, and numeric coercion

QUICK REFERENCE

  SELECT ... FROM t       db.t.find(filter, projection)
  INSERT INTO t ...       db.t.insertOne(document)
  UPDATE t SET ...        db.t.updateMany(filter, {"$set": ...})
  DELETE FROM t ...       db.t.deleteMany(filter)

Run 'sql2mongo doc <topic>' for detailed documentation.
Run 'sql2mongo demos' to see translated examples.
"#
}

/// Get documentation for a specific topic
pub fn get_doc_topic(name: &str) -> Result<&'static str, CliError> {
    match DocTopic::from_name(name) {
        Some(DocTopic::Grammar) => Ok(GRAMMAR_DOC),
        Some(DocTopic::Operators) => Ok(OPERATORS_DOC),
        Some(DocTopic::Literals) => Ok(LITERALS_DOC),
        None => Err(CliError::UnknownTopic(name.to_string())),
    }
}

const GRAMMAR_DOC: &str = r#"GRAMMAR - Supported Statements

SELECT
  SELECT * | col [, col ...] FROM table [WHERE cond] [ORDER BY col [ASC|DESC]] [LIMIT n]

    Clauses may appear in any order. Scanning stops at the first word that
    does not start a clause.

    Example:
      SQL:    SELECT nombre, edad FROM usuarios WHERE edad > 20 ORDER BY edad DESC LIMIT 5;
      Mongo:  db.usuarios.find({"edad":{"$gt":20}}, {"nombre":1,"edad":1}).sort({ "edad": -1 }).limit(5);

INSERT
  INSERT INTO table [(col [, col ...])] VALUES (value [, value ...])

    Without a column list the values are named col0, col1, ...

    Example:
      SQL:    INSERT INTO t VALUES (1, 2);
      Mongo:  db.t.insertOne({"col0":1,"col1":2});

UPDATE
  UPDATE table SET col = value [, col = value ...] [WHERE cond]

    Every matching document is updated.

DELETE
  DELETE FROM table [WHERE cond]

    Every matching document is removed.

NAMES
  Names may contain letters, digits, '_', '.', and '$', so users.id is a
  single name. A keyword used as a name is lowercased.

UNSUPPORTED
  JOIN, ON, and AS are reserved words; using them is an error.
"#;

const OPERATORS_DOC: &str = r#"OPERATORS - WHERE Conditions

COMPARISON
  =       {"col": value}
  != <>   {"col": {"$ne": value}}
  >       {"col": {"$gt": value}}
  <       {"col": {"$lt": value}}
  >=      {"col": {"$gte": value}}
  <=      {"col": {"$lte": value}}

  The left side must be a column name and the right side a literal.

LOGICAL
  AND     {"$and": [left, right]}
  OR      {"$or": [left, right]}

  AND binds tighter than OR. Chains nest to the left:
    a = 1 AND b = 2 AND c = 3
    {"$and":[{"$and":[{"a":1},{"b":2}]},{"c":3}]}

  Parentheses group conditions:
    (a = 1 OR b = 2) AND c = 3

  A condition may nest at most 128 levels deep.
"#;

const LITERALS_DOC: &str = r#"LITERALS - Values

STRINGS
  'text' or "text". A backslash keeps the next character as-is.

NUMBERS
  42, 3.5

  Output follows JavaScript number printing: 10000000000000000 stays plain,
  1e21 and above print as 1e+21, below 1e-6 as 1e-7.

BARE WORDS
  A bare word used as a value is kept as text: WHERE estado = activo

NUMERIC COERCION
  Any value whose text reads as a number becomes a number, even when quoted:

    WHERE categoria = 'libros'   {"categoria":"libros"}
    WHERE codigo = '100'         {"codigo":100}
"#;
