//! Conversion of Arrow record batches with a WKB geometry column into feature collections.
//!
//! Every column other than the geometry column becomes a feature property, converted to JSON by
//! `arrow-json`. Null attribute values are kept as JSON `null`.

use arrow_array::cast::AsArray;
use arrow_array::{Array, GenericBinaryArray, OffsetSizeTrait, RecordBatch};
use arrow_json::writer::{JsonArray, WriterBuilder};
use arrow_schema::{ArrowError, DataType};

use crate::error::{WKBError, WKBResult};
use crate::io::geojson::{FeatureCollection, Properties};
use crate::io::wkb::decode_geometries;
use crate::options::DecodeOptions;

/// Decode the geometry column of a record batch and pair each geometry with its row's attributes.
///
/// Rows without a usable geometry are left out of the features and listed in
/// [`FeatureCollection::skipped`]. A missing geometry column, or one that is not `Binary` or
/// `LargeBinary`, fails the whole batch.
pub fn read_record_batch(
    batch: &RecordBatch,
    options: &DecodeOptions,
) -> WKBResult<FeatureCollection> {
    let mut collection = FeatureCollection::default();
    append_record_batch(&mut collection, batch, 0, options)?;
    Ok(collection)
}

/// Like [`read_record_batch`], over several batches of one table.
///
/// Row indices in [`FeatureCollection::skipped`] count from the start of the first batch.
pub fn read_record_batches<'a, I>(batches: I, options: &DecodeOptions) -> WKBResult<FeatureCollection>
where
    I: IntoIterator<Item = &'a RecordBatch>,
{
    let mut collection = FeatureCollection::default();
    let mut row_offset = 0;
    for batch in batches {
        append_record_batch(&mut collection, batch, row_offset, options)?;
        row_offset += batch.num_rows();
    }
    Ok(collection)
}

fn append_record_batch(
    collection: &mut FeatureCollection,
    batch: &RecordBatch,
    row_offset: usize,
    options: &DecodeOptions,
) -> WKBResult<()> {
    let geometry_index = batch
        .schema()
        .index_of(&options.geometry_column)
        .map_err(|_| WKBError::MissingColumn(options.geometry_column.clone()))?;

    let geometry = batch.column(geometry_index);
    let bufs = match geometry.data_type() {
        DataType::Binary => binary_values(geometry.as_binary::<i32>()),
        DataType::LargeBinary => binary_values(geometry.as_binary::<i64>()),
        other => {
            return Err(WKBError::IncorrectType(
                format!("expected a Binary or LargeBinary geometry column, found {other}").into(),
            ))
        }
    };

    if batch.num_rows() == 0 {
        return Ok(());
    }

    let properties = property_rows(batch, geometry_index)?;
    let decoded = decode_geometries(&bufs, options);

    for (row, ((buf, decoded), properties)) in bufs
        .iter()
        .zip(decoded)
        .zip(properties)
        .enumerate()
    {
        collection.push_decoded(row_offset + row, *buf, decoded, properties);
    }

    Ok(())
}

fn binary_values<O: OffsetSizeTrait>(array: &GenericBinaryArray<O>) -> Vec<Option<&[u8]>> {
    array.iter().collect()
}

/// One JSON object per row holding every column except `geometry_index`.
fn property_rows(batch: &RecordBatch, geometry_index: usize) -> WKBResult<Vec<Properties>> {
    let indices: Vec<usize> = (0..batch.num_columns())
        .filter(|i| *i != geometry_index)
        .collect();
    if indices.is_empty() {
        return Ok(vec![Properties::new(); batch.num_rows()]);
    }

    let attributes = batch.project(&indices)?;
    let mut writer = WriterBuilder::new()
        .with_explicit_nulls(true)
        .build::<_, JsonArray>(Vec::new());
    writer.write(&attributes)?;
    writer.finish()?;

    let rows: Vec<Properties> = serde_json::from_slice(&writer.into_inner())?;
    check_row_count(batch.num_rows(), rows.len())?;
    Ok(rows)
}

fn check_row_count(expected: usize, found: usize) -> WKBResult<()> {
    if expected != found {
        return Err(ArrowError::JsonError(format!(
            "expected {expected} attribute rows, found {found}"
        ))
        .into());
    }
    Ok(())
}
