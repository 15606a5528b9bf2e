use crate::error::Tag;
use crate::traits::{ErrorKind, Sealed};

macro_rules! define {
    ($(#[$meta:meta])* $id:ident, $mask:expr, $code:expr, $tags:expr) => {
        $(#[$meta])*
        pub struct $id;

        impl Sealed for $id {
            const CODE: u32 = $code;
            const NAME: &'static str = stringify!($id);
            const TAGS: u32 = $tags;
            fn is_superclass_of(code: u32) -> bool {
                code & $mask == $code
            }
        }

        impl ErrorKind for $id {}
    };
}

/// Errors worth retrying once the server or network recovers.
pub const SHOULD_RETRY: Tag = Tag { bit: 1 << 0 };

define!(
    /// The server answered but the response could not be understood.
    ProtocolError,
    0xFF_00_00_00,
    0x03_00_00_00,
    0
);
define!(
    /// The server answered with a non-2xx status code.
    HttpStatusError,
    0xFF_00_00_00,
    0x05_00_00_00,
    0
);
define!(
    /// Errors raised on the client side.
    ClientError,
    0xFF_00_00_00,
    0xFF_00_00_00,
    0
);
define!(
    /// Request could not be delivered to the server.
    ClientConnectionError,
    0xFF_FF_00_00,
    0xFF_01_00_00,
    1 << 0
);
define!(
    /// Misuse of the client interface.
    InterfaceError,
    0xFF_FF_00_00,
    0xFF_02_00_00,
    0
);
define!(
    /// Query parameters could not be encoded.
    ClientEncodingError,
    0xFF_FF_FF_00,
    0xFF_02_02_00,
    0
);
define!(
    /// Invalid configuration or argument passed to the client.
    InvalidArgumentError,
    0xFF_FF_FF_00,
    0xFF_02_03_00,
    0
);

macro_rules! kind_entry {
    ($id:ident) => {
        ($id::CODE, $id::NAME, $id::TAGS)
    };
}

const KINDS: &[(u32, &str, u32)] = &[
    kind_entry!(ProtocolError),
    kind_entry!(HttpStatusError),
    kind_entry!(ClientError),
    kind_entry!(ClientConnectionError),
    kind_entry!(InterfaceError),
    kind_entry!(ClientEncodingError),
    kind_entry!(InvalidArgumentError),
];

fn lookup(code: u32) -> Option<&'static (u32, &'static str, u32)> {
    KINDS.iter().find(|(c, _, _)| *c == code)
}

pub(crate) fn tag_check(code: u32, bit: u32) -> bool {
    lookup(code).map(|(_, _, tags)| tags & bit != 0).unwrap_or(false)
}

pub(crate) fn error_name(code: u32) -> &'static str {
    lookup(code).map(|(_, name, _)| *name).unwrap_or("UnknownError")
}
