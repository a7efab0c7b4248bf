use crate::core::tokens::TokenReader;
use crate::domain::model::PersonInfo;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

impl PersonInfo {
    /// Reads first name, last name, age, checking and savings, in that order.
    ///
    /// Each value is stored as soon as it is read, so on failure the fields
    /// before the bad token are updated and the rest keep their old values.
    /// The reader is left failed in that case.
    pub fn read_from<'r, R: BufRead>(
        &mut self,
        input: &'r mut TokenReader<R>,
    ) -> Result<&'r mut TokenReader<R>> {
        let first_name: String = input.extract("first_name")?;
        self.set_first_name(first_name);

        let last_name: String = input.extract("last_name")?;
        self.set_last_name(last_name);

        let age: i32 = input.extract("age")?;
        self.set_age(age);

        let checking = input.extract_finite("checking")?;
        self.set_checking(checking);

        let savings = input.extract_finite("savings")?;
        self.set_savings(savings);

        Ok(input)
    }

    /// Writes the labeled layout (leading newline, no trailing newline).
    pub fn write_to<'w, W: Write>(&self, out: &'w mut W) -> Result<&'w mut W> {
        write!(out, "{}", self)?;
        Ok(out)
    }
}

/// Reads records until the input holds nothing but whitespace.
///
/// A record cut short by end of input is an error, not a silent drop.
pub fn read_all<R: BufRead>(input: &mut TokenReader<R>) -> Result<Vec<PersonInfo>> {
    let mut records = Vec::new();

    while !input.at_end()? {
        let mut person = PersonInfo::new();
        if let Err(e) = person.read_from(input) {
            tracing::warn!(record = records.len() + 1, error = %e, "failed to read record");
            return Err(e);
        }
        records.push(person);
    }

    tracing::debug!(count = records.len(), "read records");
    Ok(records)
}

pub fn write_all<W: Write>(out: &mut W, records: &[PersonInfo]) -> Result<()> {
    for person in records {
        person.write_to(out)?;
    }
    if !records.is_empty() {
        writeln!(out)?;
    }
    out.flush()?;

    tracing::debug!(count = records.len(), "wrote records");
    Ok(())
}

/// Stable ascending sort on age.
pub fn sort_by_age(records: &mut [PersonInfo]) {
    records.sort_by(|a, b| a.cmp_by_age(b));
}
