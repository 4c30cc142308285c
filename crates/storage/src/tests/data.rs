use fitscout_domain as domain;

pub static EXERCISES: std::sync::LazyLock<Vec<domain::Exercise>> =
    std::sync::LazyLock::new(|| vec![EXERCISE.clone(), EXERCISE_2.clone()]);

pub static EXERCISE: std::sync::LazyLock<domain::Exercise> =
    std::sync::LazyLock::new(|| domain::Exercise {
        id: "0001".into(),
        name: "3/4 sit-up".into(),
        target: "abs".into(),
        equipment: "body weight".into(),
        body_part: "waist".into(),
        gif_url: Some("https://example.com/0001.gif".into()),
        secondary_muscles: vec!["hip flexors".into(), "lower back".into()],
        instructions: vec!["Lie flat on your back.".into()],
    });

pub static EXERCISE_2: std::sync::LazyLock<domain::Exercise> =
    std::sync::LazyLock::new(|| domain::Exercise {
        id: "0002".into(),
        name: "45° side bend".into(),
        target: "abs".into(),
        equipment: "body weight".into(),
        body_part: "waist".into(),
        gif_url: None,
        secondary_muscles: vec![],
        instructions: vec![],
    });
