use common::carousel::logo_cache::LogoCache;
use common::carousel::CarouselState;
use wasm_bindgen::closure::Closure;

/// Runtime state of the `SupplierCarousel`.
pub struct SupplierCarousel {
    /// Page, page size and animation of the sliding track.
    pub carousel: CarouselState,

    /// Resolved logo URLs, kept across list changes.
    pub logos: LogoCache,

    /// `resize` listener registered on `window`; removed on destroy.
    pub resize_listener: Option<Closure<dyn Fn()>>,
}
