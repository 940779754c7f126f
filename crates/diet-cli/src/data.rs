use diet_solver::Problem;

/// Daily minimums for the classic diet problem
const REQUIREMENTS: [(&str, f64); 5] = [
    ("Protein (g)", 50.0),
    ("Carbohydrates (g)", 130.0),
    ("Fat (g)", 44.0),
    ("Fiber (g)", 25.0),
    ("Vitamins (%DV)", 100.0),
];

/// Foods with cost per unit and per-unit nutrients, in requirement order
const FOODS: [(&str, f64, [f64; 5]); 8] = [
    ("Oatmeal", 0.50, [5.0, 27.0, 3.0, 4.0, 15.0]),
    ("Chicken Breast", 3.00, [31.0, 0.0, 3.6, 0.0, 10.0]),
    ("Brown Rice", 0.30, [2.6, 23.0, 0.9, 1.8, 5.0]),
    ("Broccoli", 1.50, [2.8, 7.0, 0.4, 2.6, 135.0]),
    ("Banana", 0.25, [1.3, 27.0, 0.3, 3.1, 17.0]),
    ("Eggs", 2.00, [13.0, 1.1, 11.0, 0.0, 15.0]),
    ("Almonds", 4.50, [21.0, 22.0, 49.0, 12.0, 26.0]),
    ("Milk", 1.20, [8.0, 12.0, 8.0, 0.0, 50.0]),
];

pub fn daily_diet() -> Problem {
    let mut problem = Problem::new();
    for (name, minimum) in REQUIREMENTS {
        problem.add_constraint(name, minimum);
    }
    for (name, cost, nutrients) in FOODS {
        problem.add_variable(name, cost, nutrients.to_vec());
    }
    problem
}
