//! Small types behind the `basics` demo: plain structs with methods, shared behavior through
//! traits, and dynamic dispatch over heterogeneous collections.

pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: &str, age: u32) -> Self {
        return Self {
            name: name.to_string(),
            age,
        };
    }

    pub fn greet(&self) -> String {
        return format!("Hi, my name is {} and I am {} years old.", self.name, self.age);
    }
}

pub trait Animal {
    fn name(&self) -> &str;

    fn sound(&self) -> &'static str {
        return "Makes a sound.";
    }
}

pub struct Dog {
    pub name: String,
}

pub struct Cat {
    pub name: String,
}

/// Animal with no sound of its own
pub struct Creature {
    pub name: String,
}

impl Animal for Dog {
    fn name(&self) -> &str {
        return &self.name;
    }

    fn sound(&self) -> &'static str {
        return "Woof";
    }
}

impl Animal for Cat {
    fn name(&self) -> &str {
        return &self.name;
    }

    fn sound(&self) -> &'static str {
        return "Meow";
    }
}

impl Animal for Creature {
    fn name(&self) -> &str {
        return &self.name;
    }
}

pub trait Vehicle {
    fn description(&self) -> String;
}

pub struct Car {
    pub make: String,
    pub model: String,
}

pub struct Motorcycle {
    pub make: String,
    pub model: String,
}

impl Vehicle for Car {
    fn description(&self) -> String {
        return format!("Car: {} {}", self.make, self.model);
    }
}

impl Vehicle for Motorcycle {
    fn description(&self) -> String {
        return format!("Motorcycle: {} {}", self.make, self.model);
    }
}

/// "<name>: <sound>" for every animal, in order
pub fn chorus(animals: &[Box<dyn Animal>]) -> Vec<String> {
    return animals
        .iter()
        .map(|animal| format!("{}: {}", animal.name(), animal.sound()))
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greet() {
        let person = Person::new("Laura", 30);

        assert_eq!(person.greet(), "Hi, my name is Laura and I am 30 years old.");
    }

    #[test]
    fn chorus_uses_each_animals_sound() {
        let animals: Vec<Box<dyn Animal>> = vec![
            Box::new(Dog {
                name: "Boby".to_string(),
            }),
            Box::new(Cat {
                name: "Luna".to_string(),
            }),
            Box::new(Creature {
                name: "Critter".to_string(),
            }),
        ];

        assert_eq!(
            chorus(&animals),
            vec!["Boby: Woof", "Luna: Meow", "Critter: Makes a sound."]
        );
    }

    #[test]
    fn vehicle_descriptions() {
        let vehicles: Vec<Box<dyn Vehicle>> = vec![
            Box::new(Car {
                make: "Toyota".to_string(),
                model: "Corolla".to_string(),
            }),
            Box::new(Motorcycle {
                make: "Yamaha".to_string(),
                model: "MT-07".to_string(),
            }),
        ];

        let descriptions: Vec<String> = vehicles.iter().map(|v| v.description()).collect();

        assert_eq!(
            descriptions,
            vec!["Car: Toyota Corolla", "Motorcycle: Yamaha MT-07"]
        );
    }
}
