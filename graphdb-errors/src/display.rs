use std::fmt;

use crate::fields::{QueryText, ResponseBody, StatusCode};
use crate::Error;

pub struct DisplayError<'a>(&'a Error, bool);
pub struct VerboseError<'a>(&'a Error);

pub fn display_error(e: &Error, verbose: bool) -> DisplayError<'_> {
    DisplayError(e, verbose)
}
pub fn display_error_verbose(e: &Error) -> VerboseError<'_> {
    VerboseError(e)
}

impl fmt::Display for DisplayError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let DisplayError(ref e, verbose) = self;
        write!(f, "{:#}", e)?;
        if *verbose {
            if let Some(query) = e.get::<QueryText>() {
                write!(f, "\n  Query:")?;
                for line in query.lines() {
                    write!(f, "\n      {}", line)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for VerboseError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let e = self.0;
        writeln!(f, "Error type: {}", e.kind_debug())?;
        writeln!(f, "Message: {:#}", e)?;
        if let Some(status) = e.get::<StatusCode>() {
            writeln!(f, "Status: {}", status)?;
        }
        if let Some(query) = e.get::<QueryText>() {
            writeln!(f, "Query:")?;
            for line in query.lines() {
                writeln!(f, "    {}", line)?;
            }
        }
        if let Some(body) = e.get::<ResponseBody>() {
            writeln!(f, "Response body:")?;
            for line in body.lines() {
                writeln!(f, "    {}", line)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ErrorKind, HttpStatusError};

    #[test]
    fn verbose_includes_fields() {
        let err = HttpStatusError::with_message("unexpected status code: 500")
            .set::<StatusCode>(500u16)
            .set::<QueryText>("not a real cypher query");
        assert_eq!(
            display_error_verbose(&err).to_string(),
            "Error type: HttpStatusError [0x05000000]\n\
             Message: HttpStatusError: unexpected status code: 500\n\
             Status: 500\n\
             Query:\n    not a real cypher query\n"
        );
    }

    #[test]
    fn short_display_includes_query_only_when_verbose() {
        let err = HttpStatusError::with_message("boom").set::<QueryText>("RETURN 1");
        assert_eq!(display_error(&err, false).to_string(), "HttpStatusError: boom");
        assert_eq!(
            display_error(&err, true).to_string(),
            "HttpStatusError: boom\n  Query:\n      RETURN 1"
        );
    }
}
