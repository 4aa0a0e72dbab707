use bank::basics::{chorus, Animal, Car, Cat, Creature, Dog, Motorcycle, Person, Vehicle};
use bank::ids::{AccountNumber, DocumentId};
use bank::models::{Account, AccountKind, Customer};
use bank::{Money, Result};

fn main() -> Result {
    println!("OOP BASICS IN RUST");
    println!("{}", "=".repeat(50));

    section("1. STRUCTS AND METHODS");

    let people = [Person::new("Alejandro", 25), Person::new("Laura", 30)];
    for (idx, person) in people.iter().enumerate() {
        println!("Person {}: {}", idx + 1, person.greet());
    }

    section("2. ENCAPSULATION");

    let owner = Customer::new("Alejandro", DocumentId::parse("1001")?)?;
    let mut account = Account::new(AccountNumber::parse("100")?, owner, AccountKind::savings());

    account.deposit(&Money::from_whole(1000))?;
    println!("Holder: {}", account.owner().name());
    println!("Opening balance: {}", account.display_balance());

    account.deposit(&Money::from_whole(500))?;
    match account.withdraw(&Money::from_whole(200)) {
        Ok(()) => println!("Withdrew 200.0"),
        Err(e) => println!("{e}"),
    }
    println!("{}", account.display_balance());

    section("3. SHARED BEHAVIOR");

    let dog = Dog {
        name: "Firulais".to_string(),
    };
    let cat = Cat {
        name: "Mishito".to_string(),
    };
    println!("{}: {}", dog.name(), dog.sound());
    println!("{}: {}", cat.name(), cat.sound());

    section("4. DYNAMIC DISPATCH");

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
    for line in chorus(&animals) {
        println!("{line}");
    }

    section("5. VEHICLES");

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
    for vehicle in vehicles.iter() {
        println!("  {}", vehicle.description());
    }

    println!();
    println!("Examples completed!");
    println!("{}", "=".repeat(50));

    Ok(())
}

fn section(title: &str) {
    println!();
    println!("{title}");
    println!("{}", "-".repeat(40));
}
