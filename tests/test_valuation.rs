use valoracao::domain::valuation::{
    calculate_barsi, calculate_dcf, calculate_graham, calculate_peter_lynch, ceiling_price,
    BarsiInput, DcfInput, GrahamInput, PeterLynchInput, ValuationResult,
};
use valoracao::domain::values::peg_classification::PegClassification;
use valoracao::domain::values::signal::Signal;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() <= 1e-9 * b.abs().max(1.0), "{a} != {b}");
}

fn assert_ceiling_invariant(r: &ValuationResult, safety_margin: f64) {
    assert_close(r.ceiling_price, r.intrinsic_value * (1.0 - safety_margin / 100.0));
    assert_eq!(r.ceiling_price, ceiling_price(r.intrinsic_value, safety_margin));
}

#[test]
fn test_graham_matches_closed_form() {
    for lpa in [0.5, 1.0, 2.37, 10.0] {
        for vpa in [1.0, 7.5, 18.0, 42.1] {
            let r = calculate_graham(&GrahamInput {
                lpa,
                vpa,
                current_price: 25.0,
                safety_margin: 30.0,
            });
            assert_close(r.intrinsic_value, (22.5 * lpa * vpa).sqrt());
        }
    }
}

#[test]
fn test_graham_non_positive_product_is_exactly_zero() {
    for (lpa, vpa) in [(0.0, 10.0), (-1.0, 10.0), (1.0, -10.0), (0.0, 0.0)] {
        let r = calculate_graham(&GrahamInput {
            lpa,
            vpa,
            current_price: 25.0,
            safety_margin: 30.0,
        });
        assert_eq!(r.intrinsic_value, 0.0);
        assert_eq!(r.safety_margin_percent, 0.0);
    }
}

#[test]
fn test_ceiling_invariant_for_every_method() {
    for margin in [0.0, 10.0, 25.0, 50.0, 100.0] {
        let g = calculate_graham(&GrahamInput {
            lpa: 2.0,
            vpa: 18.0,
            current_price: 20.0,
            safety_margin: margin,
        });
        assert_ceiling_invariant(&g, margin);

        let b = calculate_barsi(&BarsiInput {
            current_dy: 9.0,
            desired_dy: 6.0,
            current_price: 20.0,
            safety_margin: margin,
        });
        assert_ceiling_invariant(&b, margin);

        let d = calculate_dcf(&DcfInput {
            free_cash_flow: 5_000_000.0,
            growth_rate: 8.0,
            discount_rate: 11.0,
            projection_years: 5,
            total_shares: 1_000_000.0,
            current_price: 20.0,
            safety_margin: margin,
        });
        assert_ceiling_invariant(&d, margin);

        let l = calculate_peter_lynch(&PeterLynchInput {
            lpa: 2.0,
            growth_rate: 12.0,
            pl_ratio: Some(9.0),
            current_price: 20.0,
            safety_margin: margin,
        });
        assert_ceiling_invariant(&l, margin);
    }
}

#[test]
fn test_signal_boundaries() {
    assert_eq!(Signal::classify(95.00, 100.0), Signal::Buy);
    assert_eq!(Signal::classify(95.01, 100.0), Signal::Neutral);
    assert_eq!(Signal::classify(110.00, 100.0), Signal::Neutral);
    assert_eq!(Signal::classify(110.01, 100.0), Signal::Expensive);
}

#[test]
fn test_method_signal_uses_ceiling() {
    // Lynch: 5 * 20 = 100 intrinsic, 0% margin, ceiling 100.
    let at = |price: f64| {
        calculate_peter_lynch(&PeterLynchInput {
            lpa: 5.0,
            growth_rate: 20.0,
            pl_ratio: None,
            current_price: price,
            safety_margin: 0.0,
        })
        .signal
    };
    assert_eq!(at(95.0), Signal::Buy);
    assert_eq!(at(100.0), Signal::Neutral);
    assert_eq!(at(111.0), Signal::Expensive);
}

#[test]
fn test_barsi_example() {
    let r = calculate_barsi(&BarsiInput {
        current_dy: 8.0,
        desired_dy: 6.0,
        current_price: 30.0,
        safety_margin: 25.0,
    });
    assert_close(r.intrinsic_value, 40.0);
    assert_close(r.ceiling_price, 30.0);
    assert_eq!(r.method, "Luiz Barsi");
}

#[test]
fn test_dcf_is_bit_identical_across_calls() {
    let input = DcfInput {
        free_cash_flow: 123_456_789.0,
        growth_rate: 7.3,
        discount_rate: 10.9,
        projection_years: 12,
        total_shares: 4_567_890.0,
        current_price: 18.2,
        safety_margin: 30.0,
    };
    let a = calculate_dcf(&input);
    let b = calculate_dcf(&input);
    assert_eq!(a.intrinsic_value.to_bits(), b.intrinsic_value.to_bits());
    assert_eq!(a.ceiling_price.to_bits(), b.ceiling_price.to_bits());
    assert_eq!(a.safety_margin_percent.to_bits(), b.safety_margin_percent.to_bits());
    assert_eq!(a.upside_percent.to_bits(), b.upside_percent.to_bits());
    assert_eq!(a.signal, b.signal);
}

#[test]
fn test_peter_lynch_example() {
    let r = calculate_peter_lynch(&PeterLynchInput {
        lpa: 5.0,
        growth_rate: 15.0,
        pl_ratio: Some(12.0),
        current_price: 60.0,
        safety_margin: 25.0,
    });
    assert_eq!(r.intrinsic_value, 75.0);
    assert_close(r.peg.unwrap(), 0.8);
    assert_eq!(r.peg_classification, Some(PegClassification::Cheap));

    let r = calculate_peter_lynch(&PeterLynchInput {
        lpa: 5.0,
        growth_rate: 15.0,
        pl_ratio: None,
        current_price: 60.0,
        safety_margin: 25.0,
    });
    assert_eq!(r.intrinsic_value, 75.0);
    assert_eq!(r.peg, None);
    assert_eq!(r.peg_classification, None);
}

#[test]
fn test_input_records_accept_camel_case_json() {
    let input: DcfInput = serde_json::from_str(
        r#"{"freeCashFlow":1000,"growthRate":5,"discountRate":10,"projectionYears":5,
            "totalShares":100,"currentPrice":10,"safetyMargin":20}"#,
    )
    .unwrap();
    assert_eq!(input.projection_years, 5);

    let input: PeterLynchInput =
        serde_json::from_str(r#"{"lpa":2,"growthRate":10,"currentPrice":15,"safetyMargin":25}"#)
            .unwrap();
    assert_eq!(input.pl_ratio, None);
}
