//! Selecting a handler for an input of unknown format.

use crate::error::{TransformError, TransformResult};
use crate::handlers::{FileFormatDetection, TransformOutput};

/// Transforms `input` with the first handler in `handlers` that accepts it.
///
/// # Parameters
///
/// - `handlers`: Candidate handlers, tried in order
/// - `input`: The file data
/// - `file_extension`: Lowercase extension of the file, without the leading dot
///
/// # Returns
///
/// The accepting handler together with its output, or [`TransformError::NoSupportedHandler`]
/// if no handler accepted the input.
pub fn transform_slice_with_multiple_handlers<HandlerIterator, Handler>(
    handlers: HandlerIterator,
    input: &[u8],
    file_extension: Option<&str>,
) -> TransformResult<(Handler, TransformOutput)>
where
    HandlerIterator: IntoIterator<Item = Handler>,
    Handler: FileFormatDetection,
{
    for handler in handlers {
        if handler.can_handle(input, file_extension) {
            let output = handler.transform(input)?;
            return Ok((handler, output));
        }
    }

    Err(TransformError::NoSupportedHandler)
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    #[test]
    fn first_accepting_handler_wins() {
        let rejecting = MockHandler::new_rejecting();
        let first = MockHandler::new_accepting("bmp");
        let second = MockHandler::new_accepting("bmp");

        let (handler, output) = transform_slice_with_multiple_handlers(
            [&rejecting, &first, &second],
            &[1, 2, 3],
            Some("bmp"),
        )
        .unwrap();

        assert_eq!(output, TransformOutput::Converted(vec![1, 2, 3]));
        assert!(handler.get_calls().transform_called);
        assert_eq!(rejecting.get_calls().can_handle_calls.len(), 1);
        assert!(!rejecting.get_calls().transform_called);
        assert!(second.get_calls().can_handle_calls.is_empty());
    }

    #[test]
    fn extension_is_forwarded_to_handlers() {
        let handler = MockHandler::new_accepting("bmp");
        let result = transform_slice_with_multiple_handlers([&handler], &[0], Some("ppm"));

        assert_eq!(result.unwrap_err(), TransformError::NoSupportedHandler);
        assert_eq!(
            handler.get_calls().can_handle_calls,
            vec![Some("ppm".to_string())]
        );
    }

    #[test]
    fn empty_handler_list_is_unsupported() {
        let handlers: [MockHandler; 0] = [];
        assert_eq!(
            transform_slice_with_multiple_handlers(handlers, &[0], None).unwrap_err(),
            TransformError::NoSupportedHandler
        );
    }
}
