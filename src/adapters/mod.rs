// Adapters layer: concrete implementations of the domain ports over external
// systems. Only the Chrome DevTools Protocol driver lives here today.

pub mod chromium;
