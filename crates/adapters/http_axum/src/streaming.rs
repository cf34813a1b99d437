//! Incremental JSON-array encoding of a person stream.

use axum::BoxError;
use axum::body::{Body, Bytes};
use tokio_stream::StreamExt;

use census_app::ports::PersonStream;

/// Turn a person stream into a response [`Body`] carrying a JSON array.
///
/// Each element is serialised and written as its own chunk, so the
/// response starts before the full result set exists. A storage error
/// mid-stream terminates the body after the chunks already sent.
pub(crate) fn json_array(people: PersonStream) -> Body {
    let mut first = true;
    let elements = people.map(move |result| -> Result<Bytes, BoxError> {
        let person = result?;
        let mut chunk = if first {
            first = false;
            Vec::new()
        } else {
            vec![b',']
        };
        serde_json::to_writer(&mut chunk, &person)?;
        Ok(Bytes::from(chunk))
    });

    let framed = tokio_stream::once(Ok::<_, BoxError>(Bytes::from_static(b"[")))
        .chain(elements)
        .chain(tokio_stream::once(Ok(Bytes::from_static(b"]"))));

    Body::from_stream(framed)
}
