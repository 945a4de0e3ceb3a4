// db/jobdb.rs
use async_trait::async_trait;
use uuid::Uuid;

use super::collection::{Collection, Record};
use super::db::DBClient;
use super::keys;
use super::storage::StorageError;

use crate::dtos::jobdtos::UpdateJobOfferDto;
use crate::models::jobmodels::{JobOffer, JobRequest, JobRequestStatus};

impl Record for JobRequest {
    const COLLECTION: &'static str = keys::JOB_REQUESTS;

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for JobOffer {
    const COLLECTION: &'static str = keys::JOB_OFFERS;

    fn id(&self) -> Uuid {
        self.id
    }
}

#[async_trait]
pub trait JobExt {
    async fn get_job_requests(&self) -> Result<Vec<JobRequest>, StorageError>;

    async fn get_job_request(&self, request_id: Uuid) -> Result<Option<JobRequest>, StorageError>;

    async fn save_job_request(&self, request: JobRequest) -> Result<JobRequest, StorageError>;

    async fn update_job_request_status(
        &self,
        request_id: Uuid,
        status: JobRequestStatus,
    ) -> Result<JobRequest, StorageError>;

    async fn get_job_offers(&self, request_id: Uuid) -> Result<Vec<JobOffer>, StorageError>;

    async fn get_job_offer(&self, offer_id: Uuid) -> Result<Option<JobOffer>, StorageError>;

    async fn save_job_offer(&self, offer: JobOffer) -> Result<JobOffer, StorageError>;

    async fn update_job_offer(
        &self,
        offer_id: Uuid,
        changes: UpdateJobOfferDto,
    ) -> Result<JobOffer, StorageError>;
}

#[async_trait]
impl JobExt for DBClient {
    async fn get_job_requests(&self) -> Result<Vec<JobRequest>, StorageError> {
        Ok(self.load::<JobRequest>().await?.into_vec())
    }

    async fn get_job_request(&self, request_id: Uuid) -> Result<Option<JobRequest>, StorageError> {
        Ok(self.load::<JobRequest>().await?.get(&request_id).cloned())
    }

    async fn save_job_request(&self, request: JobRequest) -> Result<JobRequest, StorageError> {
        self.mutate(move |requests: &mut Collection<JobRequest>| {
            requests.insert(request.clone());
            Ok::<_, StorageError>(request)
        })
        .await
    }

    async fn update_job_request_status(
        &self,
        request_id: Uuid,
        status: JobRequestStatus,
    ) -> Result<JobRequest, StorageError> {
        self.mutate(move |requests: &mut Collection<JobRequest>| {
            requests.update(request_id, |request| request.status = status)
        })
        .await
    }

    async fn get_job_offers(&self, request_id: Uuid) -> Result<Vec<JobOffer>, StorageError> {
        let offers = self.load::<JobOffer>().await?;
        Ok(offers.filter(|offer| offer.job_request_id == request_id))
    }

    async fn get_job_offer(&self, offer_id: Uuid) -> Result<Option<JobOffer>, StorageError> {
        Ok(self.load::<JobOffer>().await?.get(&offer_id).cloned())
    }

    async fn save_job_offer(&self, offer: JobOffer) -> Result<JobOffer, StorageError> {
        self.mutate(move |offers: &mut Collection<JobOffer>| {
            offers.insert(offer.clone());
            Ok::<_, StorageError>(offer)
        })
        .await
    }

    async fn update_job_offer(
        &self,
        offer_id: Uuid,
        changes: UpdateJobOfferDto,
    ) -> Result<JobOffer, StorageError> {
        self.mutate(move |offers: &mut Collection<JobOffer>| {
            offers.update(offer_id, |offer| {
                if let Some(status) = changes.status {
                    offer.status = status;
                }
                if let Some(amount) = changes.amount {
                    offer.amount = amount;
                }
                if let Some(delivery_days) = changes.delivery_days {
                    offer.delivery_days = delivery_days;
                }
                if let Some(proposal) = changes.proposal {
                    offer.proposal = proposal;
                }
            })
        })
        .await
    }
}
