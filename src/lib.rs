//! Decode [Well-Known Binary](https://libgeos.org/specifications/wkb/) polygon geometries pulled
//! out of columnar data, and assemble them with their row attributes into GeoJSON-shaped
//! feature collections.
//!
//! ```
//! use wkb_features::io::wkb::{decode_geometry, write_geometry_as_wkb, Endianness};
//! use wkb_features::{Coord, Geometry, Polygon, Ring};
//!
//! let square = Polygon::new(vec![Ring::new(vec![
//!     Coord::new(0., 0.),
//!     Coord::new(0., 1.),
//!     Coord::new(1., 1.),
//!     Coord::new(1., 0.),
//!     Coord::new(0., 0.),
//! ])]);
//! let geom = Geometry::Polygon(square);
//!
//! let mut buf = Vec::new();
//! write_geometry_as_wkb(&mut buf, &geom, Endianness::LittleEndian).unwrap();
//! assert_eq!(decode_geometry(Some(buf.as_slice())).unwrap(), geom);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use geometry::{Coord, Geometry, MultiPolygon, Polygon, Ring};
pub use options::{DecodeOptions, MemberPolicy, UnsupportedTypePolicy};

pub mod algorithm;
pub mod error;
pub mod geometry;
pub mod io;
pub mod options;
pub mod table;
#[cfg(test)]
pub(crate) mod test;
