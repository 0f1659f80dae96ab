//! Proc macros for the sqlbed test suites.

use proc_macro::TokenStream;


/// Turn `fn t(db: TestDatabase) [-> Result<..>]` into a `#[test]` that
/// provisions the fixture and passes it in as the function's argument.
///
/// Arguments:
/// - `init_sql = <expr>` — SQL applied once when the database is provisioned
/// - `path = "name.db"` — explicit database name; defaults to `<fn name>.db`
/// - `on_disk` — provision a file-backed database instead of in-memory
///
/// A `Result`-returning body is unwrapped, so an `Err` fails the test.
#[proc_macro_attribute]
pub fn test(args: TokenStream, input: TokenStream) -> TokenStream {
    test::expand(args, input)
}
