use super::bit;
use crate::{
    configs::{SpectrumCouplingMode, SpectrumFilterQ, SpectrumSource},
    ll::SPECTRUM,
    TDA7419,
};

impl TDA7419 {
    /// Sets the spectrum analyzer band pass Q factor
    pub fn set_spectrum_filter_q(&mut self, q: SpectrumFilterQ) {
        self.ll.modify::<SPECTRUM>(|w| w.filter_q(q.bits()));
    }

    /// Returns the spectrum analyzer band pass Q factor
    pub fn get_spectrum_filter_q(&self) -> SpectrumFilterQ {
        SpectrumFilterQ::from_bits(self.ll.read::<SPECTRUM>().filter_q()).unwrap_or_default()
    }

    /// Enables or disables spectrum analyzer auto reset
    pub fn set_spectrum_auto_reset(&mut self, enable: bool) {
        self.ll.modify::<SPECTRUM>(|w| w.auto_reset(bit(enable)));
    }

    /// Returns the spectrum analyzer auto reset bit
    pub fn get_spectrum_auto_reset(&self) -> bool {
        self.ll.read::<SPECTRUM>().auto_reset() != 0
    }

    /// Selects the spectrum analyzer signal source
    pub fn set_spectrum_source(&mut self, source: SpectrumSource) {
        self.ll.modify::<SPECTRUM>(|w| w.source(source.bits()));
    }

    /// Returns the spectrum analyzer signal source
    pub fn get_spectrum_source(&self) -> SpectrumSource {
        SpectrumSource::from_bits(self.ll.read::<SPECTRUM>().source()).unwrap_or_default()
    }

    /// Sets the spectrum analyzer run bit
    pub fn set_spectrum_run(&mut self, enable: bool) {
        self.ll.modify::<SPECTRUM>(|w| w.run(bit(enable)));
    }

    /// Returns the spectrum analyzer run bit
    pub fn get_spectrum_run(&self) -> bool {
        self.ll.read::<SPECTRUM>().run() != 0
    }

    /// Sets the spectrum analyzer reset bit
    pub fn set_spectrum_reset(&mut self, enable: bool) {
        self.ll.modify::<SPECTRUM>(|w| w.reset(bit(enable)));
    }

    /// Returns the spectrum analyzer reset bit
    pub fn get_spectrum_reset(&self) -> bool {
        self.ll.read::<SPECTRUM>().reset() != 0
    }

    /// Selects the external (`true`) or internal clock
    pub fn set_external_clock(&mut self, external: bool) {
        self.ll.modify::<SPECTRUM>(|w| w.external_clock(bit(external)));
    }

    /// Returns true if the external clock is selected
    pub fn get_external_clock(&self) -> bool {
        self.ll.read::<SPECTRUM>().external_clock() != 0
    }

    /// Sets the spectrum analyzer coupling mode
    pub fn set_spectrum_coupling_mode(&mut self, mode: SpectrumCouplingMode) {
        self.ll.modify::<SPECTRUM>(|w| w.coupling(mode.bits()));
    }

    /// Returns the spectrum analyzer coupling mode
    pub fn get_spectrum_coupling_mode(&self) -> SpectrumCouplingMode {
        SpectrumCouplingMode::from_bits(self.ll.read::<SPECTRUM>().coupling()).unwrap_or_default()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ll::Register;

    #[test]
    fn spectrum_fields() {
        let mut tda = TDA7419::new();

        assert_eq!(tda.get_spectrum_source(), SpectrumSource::InGain);
        assert!(tda.get_spectrum_run());
        assert!(tda.get_spectrum_reset());

        tda.set_spectrum_coupling_mode(SpectrumCouplingMode::AcAfterBass);
        tda.set_external_clock(true);
        tda.set_spectrum_reset(false);
        tda.set_spectrum_run(false);
        tda.set_spectrum_source(SpectrumSource::Bass);
        tda.set_spectrum_auto_reset(true);
        tda.set_spectrum_filter_q(SpectrumFilterQ::Q1_75);

        assert_eq!(tda.registers().field(SPECTRUM::INDEX).value(), 0b1110_0011);
        assert_eq!(
            tda.get_spectrum_coupling_mode(),
            SpectrumCouplingMode::AcAfterBass
        );
        assert!(tda.get_external_clock());
        assert!(tda.get_spectrum_auto_reset());
        assert_eq!(tda.get_spectrum_filter_q(), SpectrumFilterQ::Q1_75);
    }
}
