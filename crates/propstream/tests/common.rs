#![allow(missing_docs)]

/// A small configuration file cut at awkward places: inside a name, inside a
/// quoted value, between the halves of a line continuation.
pub const STREAM: [&str; 6] = [
    "# service config\r\nhost = exam",
    "ple.org\nport=80",
    r#"80;timeout="30 s"#,
    "\" # seconds\nretries/* tuned */=3\n",
    r#"bogus
name="a\"b"
=x;path=/us"#,
    "r/\\\nlocal\n",
];
