//! Algebraic laws of the constant-Cp mixing operators.
//!
//! Checked against the perfect-gas and constant-density equations of state
//! with randomized amounts and coefficients.

use cal_core::{Tolerances, nearly_equal};
use cal_thermo::{
    EquationOfState, PerfectGas, RhoConst, Specie, Thermo, ThermoProperties, ThermoState,
};
use proptest::prelude::*;

fn gas(n: f64, cp: f64, hf: f64, t_ref: f64, h_ref: f64) -> ThermoState<PerfectGas> {
    ThermoState::new(
        PerfectGas::new(Specie::new("gas", n, 28.0)),
        cp,
        hf,
        t_ref,
        h_ref,
    )
}

fn tol() -> Tolerances {
    Tolerances {
        abs: 1e-6,
        rel: 1e-10,
    }
}

prop_compose! {
    fn any_gas()(
        n in 0.1_f64..10.0,
        cp in 100.0_f64..20_000.0,
        hf in -2.0e7_f64..2.0e7,
        t_ref in 200.0_f64..400.0,
        h_ref in -1.0e5_f64..1.0e5,
    ) -> ThermoState<PerfectGas> {
        gas(n, cp, hf, t_ref, h_ref)
    }
}

proptest! {
    #[test]
    fn formation_term_is_isolated(st in any_gas(), p in 1e3_f64..1e7, t in 50.0_f64..3000.0) {
        prop_assert!(nearly_equal(st.ha(p, t) - st.hs(p, t), st.hc(), tol()));
    }

    #[test]
    fn sensible_enthalpy_at_datum(st in any_gas(), p in 1e3_f64..1e7) {
        let t_ref = st.t_ref();
        prop_assert_eq!(st.hs(p, t_ref), st.h_ref() + st.eos().h(p, t_ref));
    }

    #[test]
    fn limit_is_identity(st in any_gas(), t in proptest::num::f64::ANY) {
        let limited = st.limit(t);
        prop_assert!(limited.to_bits() == t.to_bits());
    }

    #[test]
    fn combine_is_mole_weighted(a in any_gas(), b in any_gas()) {
        let (na, nb) = (a.n_moles(), b.n_moles());
        let mix = a.combine(&b);
        let expected = (na * a.const_cp() + nb * b.const_cp()) / (na + nb);
        prop_assert!(nearly_equal(mix.const_cp(), expected, tol()));
        let expected_hf = (na * a.hc() + nb * b.hc()) / (na + nb);
        prop_assert!(nearly_equal(mix.hc(), expected_hf, tol()));
        let expected_t_ref = (na * a.t_ref() + nb * b.t_ref()) / (na + nb);
        prop_assert!(nearly_equal(mix.t_ref(), expected_t_ref, tol()));
    }

    #[test]
    fn in_place_matches_combine_except_datum(a in any_gas(), b in any_gas()) {
        let mixed = a.combine(&b);
        let mut acc = a.clone();
        acc.combine_in_place(&b);

        prop_assert!(nearly_equal(acc.const_cp(), mixed.const_cp(), tol()));
        prop_assert!(nearly_equal(acc.hc(), mixed.hc(), tol()));
        prop_assert!(nearly_equal(acc.n_moles(), mixed.n_moles(), tol()));
        prop_assert_eq!(acc.t_ref(), a.t_ref());
        prop_assert_eq!(acc.h_ref(), a.h_ref());
    }

    #[test]
    fn remove_in_place_matches_subtract_except_datum(a in any_gas(), b in any_gas()) {
        let rest = a.subtract(&b);
        let mut acc = a.clone();
        acc.remove_in_place(&b);

        prop_assert_eq!(acc.n_moles().to_bits(), rest.n_moles().to_bits());
        prop_assert_eq!(acc.const_cp().to_bits(), rest.const_cp().to_bits());
        prop_assert_eq!(acc.hc().to_bits(), rest.hc().to_bits());
        prop_assert_eq!(acc.t_ref(), a.t_ref());
        prop_assert_eq!(acc.h_ref(), a.h_ref());
        prop_assert_eq!(rest.t_ref(), a.t_ref());
        prop_assert_eq!(rest.h_ref(), a.h_ref());
    }

    #[test]
    fn scale_keeps_coefficients(a in any_gas(), s in 0.01_f64..100.0) {
        let scaled = a.scale(s);
        prop_assert_eq!(scaled.const_cp(), a.const_cp());
        prop_assert_eq!(scaled.hc(), a.hc());
        prop_assert_eq!(scaled.t_ref(), a.t_ref());
        prop_assert_eq!(scaled.h_ref(), a.h_ref());
        prop_assert_eq!(scaled.eos(), &(a.eos().clone() * s));
    }

    #[test]
    fn difference_aliases_reversed_subtract(a in any_gas(), b in any_gas()) {
        let d = a.difference(&b);
        let s = b.subtract(&a);
        prop_assert_eq!(d.const_cp().to_bits(), s.const_cp().to_bits());
        prop_assert_eq!(d.hc().to_bits(), s.hc().to_bits());
        prop_assert_eq!(d.t_ref().to_bits(), s.t_ref().to_bits());
        prop_assert_eq!(d.h_ref().to_bits(), s.h_ref().to_bits());
        prop_assert_eq!(d.n_moles().to_bits(), s.n_moles().to_bits());
    }

    #[test]
    fn remove_undoes_combine(a in any_gas(), b in any_gas()) {
        let mut acc = a.clone();
        acc += &b;
        acc -= &b;
        let loose = Tolerances { abs: 1e-4, rel: 1e-8 };
        prop_assert!(nearly_equal(acc.n_moles(), a.n_moles(), loose));
        prop_assert!(nearly_equal(acc.const_cp(), a.const_cp(), loose));
        prop_assert!(nearly_equal(acc.hc(), a.hc(), loose));
    }
}

#[test]
fn sensible_enthalpy_from_standard_datum() {
    let st = gas(1.0, 1000.0, 0.0, 298.15, 0.0);
    assert_eq!(st.hs(101_325.0, 298.15), 0.0);
    assert_eq!(st.ha(101_325.0, 298.15), 0.0);
    assert!(nearly_equal(st.hs(101_325.0, 398.15), 100_000.0, tol()));
}

#[test]
fn equal_amount_mix_of_liquids() {
    let liquid = |name: &str, rho: f64, cp: f64| {
        ThermoState::new(RhoConst::new(Specie::new(name, 1.0, 18.0), rho), cp, 0.0, 298.15, 0.0)
    };
    let a = liquid("a", 1000.0, 1000.0);
    let b = liquid("b", 800.0, 2000.0);
    let mix = &a + &b;
    assert_eq!(mix.const_cp(), 1500.0);
    assert_eq!(mix.rho(1e5, 300.0), 900.0);
}
