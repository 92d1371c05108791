//! Layer-neutrale Mathematik, von `core` und `playback` gemeinsam genutzt.

pub mod curve_geometry;
