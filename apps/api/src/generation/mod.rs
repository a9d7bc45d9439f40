// Card generation pipeline: validate the name, fit the font, center the
// text, rasterize onto the base image, encode PNG. The compositor is pure
// per-request computation with no caching and no shared state.

pub mod compositor;
pub mod handlers;
