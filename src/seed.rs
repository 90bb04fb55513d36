//! Demo data for a fresh store.
//!
//! Creates a three-animal herd (Gauri is Ganga's calf), two days of milk,
//! two feeds with a purchase and a consumption entry, one medicine with an
//! ongoing treatment, expenses, a waste entry, two sales and two customers.
//! Everything goes through the regular create path, so ids and timestamps are
//! generated and derived totals are computed the same way as for API writes.

use crate::errors::ServiceError;
use crate::models::{
    Cattle, Customer, Expense, Feed, FeedTransaction, Medicine, MedicineApplication, MilkRecord,
    Record, Sale, Waste,
};
use crate::repositories::{ProvideRepository, Repositories};
use crate::services::RecordService;
use serde_json::{json, Value};
use tracing::info;

/// Seeds demo records when the herd is empty. Returns whether anything was written.
pub async fn seed_demo_data(repositories: &Repositories) -> Result<bool, ServiceError> {
    if !service::<Cattle>(repositories).is_empty().await? {
        info!("Store already holds cattle; skipping demo data");
        return Ok(false);
    }

    info!("Seeding demo data...");
    let herd = create_cattle(repositories).await?;
    let feeds = create_feed(repositories, &herd).await?;
    create_milk(repositories, &herd).await?;
    create_medicine(repositories, &herd).await?;
    create_ledger(repositories, &feeds).await?;
    info!("  Demo data complete: {} cattle, {} feeds", herd.len(), feeds.len());
    Ok(true)
}

fn service<T>(repositories: &Repositories) -> RecordService<T>
where
    T: Record,
    Repositories: ProvideRepository<T>,
{
    RecordService::new(repositories.repository())
}

async fn create_all<T>(repositories: &Repositories, bodies: Vec<Value>) -> Result<Vec<T>, ServiceError>
where
    T: Record,
    Repositories: ProvideRepository<T>,
{
    let records = service::<T>(repositories);
    let mut created = Vec::with_capacity(bodies.len());
    for body in bodies {
        created.push(records.create(body).await?);
    }
    info!("  Created {} {} records", created.len(), T::COLLECTION);
    Ok(created)
}

fn id_of<T: Record>(records: &[T], index: usize) -> Value {
    records
        .get(index)
        .map(|r| Value::String(r.meta().id.clone()))
        .unwrap_or(Value::Null)
}

async fn create_cattle(repositories: &Repositories) -> Result<Vec<Cattle>, ServiceError> {
    let cattle = service::<Cattle>(repositories);
    let ganga = cattle
        .create(json!({
            "name": "Ganga",
            "category": "cow",
            "gender": "female",
            "breed": "Holstein",
            "dateOfJoining": "2020-06-01",
            "purchaseAmount": 45000,
            "estimatedMilkProductionDaily": 14,
            "age": 4,
            "notes": "High milk producer"
        }))
        .await?;
    let lakshmi = cattle
        .create(json!({
            "name": "Lakshmi",
            "category": "buffalo",
            "gender": "female",
            "breed": "Murrah",
            "status": "pregnant",
            "dateOfJoining": "2020-01-10",
            "purchaseAmount": 55000,
            "estimatedMilkProductionDaily": 9,
            "age": 5,
            "notes": "Expected delivery in February"
        }))
        .await?;
    let gauri = cattle
        .create(json!({
            "name": "Gauri",
            "category": "calf",
            "gender": "female",
            "breed": "Holstein",
            "dateOfJoining": "2024-05-15",
            "motherId": ganga.meta.id,
            "notes": "Daughter of Ganga"
        }))
        .await?;
    info!("  Created 3 cattle records");
    Ok(vec![ganga, lakshmi, gauri])
}

async fn create_milk(repositories: &Repositories, herd: &[Cattle]) -> Result<(), ServiceError> {
    create_all::<MilkRecord>(
        repositories,
        vec![
            json!({
                "cattleId": id_of(herd, 0),
                "date": "2024-11-22",
                "session": "morning",
                "quantity": 11.5,
                "pricePerLiter": 45,
                "paymentStatus": "paid",
                "soldTo": "dairy"
            }),
            json!({
                "cattleId": id_of(herd, 0),
                "date": "2024-11-23",
                "session": "morning",
                "quantity": 12,
                "pricePerLiter": 45,
                "paymentStatus": "paid",
                "soldTo": "dairy",
                "notes": "Good quality"
            }),
            json!({
                "cattleId": id_of(herd, 1),
                "date": "2024-11-23",
                "session": "evening",
                "quantity": 8,
                "pricePerLiter": 60,
                "soldTo": "direct-customer",
                "customerName": "Ramesh Kumar",
                "notes": "Buffalo milk, high fat"
            }),
        ],
    )
    .await?;
    Ok(())
}

async fn create_feed(repositories: &Repositories, herd: &[Cattle]) -> Result<Vec<Feed>, ServiceError> {
    let feeds = create_all::<Feed>(
        repositories,
        vec![
            json!({
                "name": "Maize Fodder",
                "feedType": "green-fodder",
                "supplier": "Local Farm",
                "currentStock": 500,
                "minimumStock": 100,
                "averageDailyConsumption": 50,
                "pricePerUnit": 5,
                "lastPurchaseDate": "2024-11-20",
                "storageLocation": "Shed A"
            }),
            json!({
                "name": "Cattle Feed Pellets",
                "feedType": "concentrate",
                "supplier": "Amul Feed",
                "currentStock": 40,
                "minimumStock": 50,
                "averageDailyConsumption": 20,
                "pricePerUnit": 35,
                "lastPurchaseDate": "2024-11-15",
                "expiryDate": "2025-05-15",
                "storageLocation": "Storage Room B"
            }),
        ],
    )
    .await?;

    create_all::<FeedTransaction>(
        repositories,
        vec![
            json!({
                "feedId": id_of(&feeds, 0),
                "transactionType": "purchase",
                "date": "2024-11-20",
                "quantity": 500,
                "unitOfMeasure": "kg",
                "pricePerUnit": 5,
                "supplier": "Local Farm",
                "billNumber": "BILL-2024-001",
                "notes": "Fresh stock"
            }),
            json!({
                "feedId": id_of(&feeds, 0),
                "transactionType": "consumption",
                "cattleId": id_of(herd, 0),
                "date": "2024-11-22",
                "quantity": 25,
                "unitOfMeasure": "kg",
                "pricePerUnit": 5
            }),
        ],
    )
    .await?;
    Ok(feeds)
}

async fn create_medicine(repositories: &Repositories, herd: &[Cattle]) -> Result<(), ServiceError> {
    let medicine = create_all::<Medicine>(
        repositories,
        vec![json!({
            "medicineName": "Oxytetracycline",
            "medicineType": "antibiotic",
            "manufacturer": "Zoetis",
            "batchNumber": "BATCH-2024-A1",
            "expiryDate": "2025-12-31",
            "unitOfMeasure": "bottle",
            "currentStock": 8,
            "minimumStock": 3,
            "pricePerUnit": 250,
            "supplier": "Vet Supplies Co"
        })],
    )
    .await?;

    create_all::<MedicineApplication>(
        repositories,
        vec![json!({
            "cattleId": id_of(herd, 0),
            "medicineId": id_of(&medicine, 0),
            "treatmentDate": "2024-11-15",
            "reasonForTreatment": "Respiratory infection",
            "dosage": 45,
            "unitOfMeasure": "ml",
            "cost": 500,
            "veterinarianName": "Dr. Rajesh Sharma",
            "followUpDate": "2024-11-22",
            "treatmentStatus": "ongoing"
        })],
    )
    .await?;
    Ok(())
}

async fn create_ledger(repositories: &Repositories, feeds: &[Feed]) -> Result<(), ServiceError> {
    create_all::<Expense>(
        repositories,
        vec![
            json!({
                "date": "2024-11-20",
                "category": "feed",
                "amount": 2500,
                "description": "Maize fodder purchase",
                "paidTo": "Local Farm",
                "paymentMethod": "cash",
                "paymentStatus": "paid",
                "billNumber": "BILL-2024-001"
            }),
            json!({
                "date": "2024-11-10",
                "category": "electricity",
                "amount": 3500,
                "description": "November electricity bill",
                "paidTo": "State Electricity Board",
                "paymentMethod": "upi",
                "paymentStatus": "paid",
                "billNumber": "EB-NOV-2024"
            }),
        ],
    )
    .await?;

    create_all::<Waste>(
        repositories,
        vec![json!({
            "date": "2024-11-18",
            "wasteType": "feed",
            "quantity": 5,
            "source": id_of(feeds, 1),
            "reason": "spoiled",
            "estimatedLoss": 175,
            "description": "Feed got wet due to roof leak"
        })],
    )
    .await?;

    create_all::<Sale>(
        repositories,
        vec![
            json!({
                "date": "2024-11-23",
                "quantityInLiters": 50,
                "pricePerLiter": 45,
                "clientName": "Sharma Dairy",
                "clientContact": "+91-9876543211",
                "paymentStatus": "paid",
                "paymentMethod": "bank-transfer",
                "notes": "Regular customer"
            }),
            json!({
                "date": "2024-11-23",
                "quantityInLiters": 8,
                "pricePerLiter": 60,
                "clientName": "Ramesh Kumar",
                "clientContact": "+91-9876543212",
                "notes": "Direct customer, buffalo milk"
            }),
        ],
    )
    .await?;

    create_all::<Customer>(
        repositories,
        vec![
            json!({
                "name": "Rajesh Kumar",
                "phone": "9876543210",
                "address": "123 Village Road",
                "joinDate": "2024-01-01"
            }),
            json!({
                "name": "Sweet Shop",
                "phone": "9876543211",
                "address": "Market Square",
                "joinDate": "2024-01-15"
            }),
        ],
    )
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeds_once_and_links_calf_to_mother() {
        let repositories = Repositories::in_memory();
        assert!(seed_demo_data(&repositories).await.unwrap());
        assert!(!seed_demo_data(&repositories).await.unwrap());

        let cattle = repositories.cattle.list().await.unwrap();
        assert_eq!(cattle.len(), 3);
        let ganga = cattle.iter().find(|c| c.name == "Ganga").unwrap();
        let gauri = cattle.iter().find(|c| c.name == "Gauri").unwrap();
        assert_eq!(gauri.mother_id.as_deref(), Some(ganga.meta.id.as_str()));

        let milk = repositories.milk.list().await.unwrap();
        assert!(milk.iter().all(|m| m.total_amount == m.quantity * m.price_per_liter));
    }
}
