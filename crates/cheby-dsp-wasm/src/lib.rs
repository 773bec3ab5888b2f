//! WASM bindings for Chebyshev filter design.
//!
//! Exposes the designer and the response sweep to JavaScript with the
//! same entry point names as the plotting frontend expects
//! (`cheby1Design`, `freqResponse`).

use cheby_dsp_core::{
    design_chebyshev1, evaluate_response, DesignError, FilterDesign, FrequencyResponse,
    DEFAULT_SAMPLE_RATE_HZ,
};
use wasm_bindgen::prelude::*;

/// Digital Chebyshev Type I design handed to JavaScript.
#[wasm_bindgen]
pub struct ChebyshevDesign {
    design: FilterDesign,
}

#[wasm_bindgen]
impl ChebyshevDesign {
    /// Ripple factor.
    #[wasm_bindgen(getter)]
    pub fn eps(&self) -> f64 {
        self.design.eps()
    }

    /// Filter order.
    #[wasm_bindgen(getter)]
    pub fn order(&self) -> usize {
        self.design.order()
    }

    /// Real parts of the digital poles.
    #[wasm_bindgen(getter, js_name = polesRe)]
    pub fn poles_re(&self) -> Vec<f64> {
        self.design.poles().iter().map(|p| p.re).collect()
    }

    /// Imaginary parts of the digital poles.
    #[wasm_bindgen(getter, js_name = polesIm)]
    pub fn poles_im(&self) -> Vec<f64> {
        self.design.poles().iter().map(|p| p.im).collect()
    }

    /// Denominator coefficients expanded from the poles (`a[0] = 1`).
    #[wasm_bindgen(getter)]
    pub fn denominator(&self) -> Vec<f64> {
        self.design.denominator().to_vec()
    }
}

/// Magnitude response handed to JavaScript.
#[wasm_bindgen]
pub struct Response {
    response: FrequencyResponse,
}

#[wasm_bindgen]
impl Response {
    /// Frequencies in Hz from 0 to Nyquist.
    #[wasm_bindgen(getter, js_name = freqHz)]
    pub fn freq_hz(&self) -> Vec<f64> {
        self.response.freq_hz().to_vec()
    }

    /// Linear magnitudes (`Infinity` where the denominator vanished).
    #[wasm_bindgen(getter)]
    pub fn mag(&self) -> Vec<f64> {
        self.response.mag().to_vec()
    }

    /// Magnitudes in dB for plotting.
    #[wasm_bindgen(getter, js_name = magDb)]
    pub fn mag_db(&self) -> Vec<f64> {
        self.response.magnitudes_db().collect()
    }

    /// Number of singular samples.
    #[wasm_bindgen(getter)]
    pub fn singularities(&self) -> usize {
        self.response.singularities()
    }
}

/// Design a Chebyshev Type I lowpass filter.
///
/// Throws on out-of-domain parameters.
#[wasm_bindgen(js_name = cheby1Design)]
pub fn cheby1_design(
    order: usize,
    ripple_db: f64,
    cutoff_norm: f64,
) -> Result<ChebyshevDesign, JsError> {
    init_panic_hook();

    let design = design_chebyshev1(order, ripple_db, cutoff_norm).map_err(reject)?;
    Ok(ChebyshevDesign { design })
}

/// Evaluate the magnitude response of `b/a` at 512 points up to Nyquist.
///
/// `sample_rate_hz` defaults to 8000 when omitted.
#[wasm_bindgen(js_name = freqResponse)]
pub fn freq_response(
    b: &[f64],
    a: &[f64],
    sample_rate_hz: Option<f64>,
) -> Result<Response, JsError> {
    init_panic_hook();

    let sample_rate_hz = sample_rate_hz.unwrap_or(DEFAULT_SAMPLE_RATE_HZ);
    let response = evaluate_response(b, a, sample_rate_hz).map_err(reject)?;

    if response.singularities() > 0 {
        web_sys::console::warn_1(
            &format!(
                "freqResponse: denominator vanishes at {} frequencies",
                response.singularities()
            )
            .into(),
        );
    }

    Ok(Response { response })
}

fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn reject(err: DesignError) -> JsError {
    web_sys::console::error_1(&format!("rejected parameters: {}", err).into());
    JsError::new(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn design_getters_expose_poles() {
        let design = ChebyshevDesign {
            design: design_chebyshev1(4, 1.0, 0.5).unwrap(),
        };
        assert_eq!(design.order(), 4);
        assert_eq!(design.poles_re().len(), 4);
        assert_eq!(design.poles_im().len(), 4);
        assert_eq!(design.denominator().len(), 5);
        assert!(design.eps() > 0.0);
    }

    #[test]
    fn response_getters_have_full_length() {
        let response = Response {
            response: evaluate_response(&[1.0], &[1.0, -0.5], DEFAULT_SAMPLE_RATE_HZ).unwrap(),
        };
        assert_eq!(response.freq_hz().len(), 512);
        assert_eq!(response.mag().len(), 512);
        assert_eq!(response.mag_db().len(), 512);
        assert_eq!(response.singularities(), 0);
    }
}
