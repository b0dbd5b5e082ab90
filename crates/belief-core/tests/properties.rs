//! Property tests for the perceive and update operations.

use belief_core::{run_with_stimuli, Agent, BiasKind};
use proptest::prelude::*;

fn unit() -> impl Strategy<Value = f64> {
    0.0f64..=1.0
}

proptest! {
    #[test]
    fn perceive_stays_in_bounds(belief in unit(), plasticity in unit(), raw in unit()) {
        for kind in [BiasKind::Proportional, BiasKind::PolarityAware] {
            let agent = Agent::new(belief, plasticity).unwrap().with_bias(kind.policy());
            let perceived = agent.perceive(raw);
            prop_assert!((0.0..=1.0).contains(&perceived));
        }
    }

    #[test]
    fn update_stays_in_bounds(belief in unit(), plasticity in unit(), percept in unit()) {
        let mut agent = Agent::new(belief, plasticity).unwrap();
        agent.update(percept);
        prop_assert!((0.0..=1.0).contains(&agent.belief()));
        prop_assert_eq!(agent.history().len(), 2);
    }

    #[test]
    fn neutral_stimulus_is_fixed_point(belief in unit(), plasticity in unit()) {
        let agent = Agent::new(belief, plasticity).unwrap();
        prop_assert_eq!(agent.perceive(0.5), 0.5);
    }

    #[test]
    fn higher_plasticity_moves_less(
        belief in unit(),
        percept in unit(),
        low in 0.0f64..0.99,
        gap in 0.01f64..1.0,
    ) {
        prop_assume!((percept - belief).abs() > 1e-6);
        let high = (low + gap).min(1.0);
        prop_assume!(high > low);

        let mut loose = Agent::new(belief, low).unwrap();
        let mut stiff = Agent::new(belief, high).unwrap();
        loose.update(percept);
        stiff.update(percept);

        prop_assert!((stiff.belief() - belief).abs() < (loose.belief() - belief).abs());
    }

    #[test]
    fn history_length_is_steps_plus_one(
        belief in unit(),
        plasticity in unit(),
        stimuli in prop::collection::vec(0.0f64..1.0, 0..200),
    ) {
        let mut agent = Agent::new(belief, plasticity).unwrap();
        run_with_stimuli(&mut agent, &stimuli).unwrap();

        prop_assert_eq!(agent.history().len(), stimuli.len() + 1);
        prop_assert!(agent.history().iter().all(|b| (0.0..=1.0).contains(b)));
    }
}
